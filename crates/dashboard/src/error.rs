//! Unified error handling for the dashboard crate.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;

/// Application-level error type for the dashboard.
///
/// Page controllers surface failures as plain message strings in their own
/// `error` state; this type exists for callers composing the layers
/// directly (configuration, wiring, the auth service).
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Login, registration, or profile flow failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
