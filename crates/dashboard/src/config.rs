//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LUXEBOARD_API_BASE_URL` - Base URL of the remote API
//!   (default: the hosted production API)
//! - `LUXEBOARD_STATE_DIR` - Directory for the durable session store
//!   (default: `.luxeboard`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default remote API base URL when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://airbnb-production-57d7.up.railway.app/api";

/// Default directory for the durable session store.
pub const DEFAULT_STATE_DIR: &str = ".luxeboard";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the remote REST API, without a trailing slash.
    pub api_base_url: String,
    /// Directory backing the durable session store.
    pub state_dir: PathBuf,
}

impl DashboardConfig {
    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file first if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `LUXEBOARD_API_BASE_URL`
    /// is set but is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_base_url = match std::env::var("LUXEBOARD_API_BASE_URL") {
            Ok(raw) => {
                Url::parse(&raw).map_err(|e| {
                    ConfigError::InvalidEnvVar("LUXEBOARD_API_BASE_URL".to_owned(), e.to_string())
                })?;
                raw.trim_end_matches('/').to_owned()
            }
            Err(_) => DEFAULT_API_BASE_URL.to_owned(),
        };

        let state_dir = std::env::var("LUXEBOARD_STATE_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_STATE_DIR), PathBuf::from);

        Ok(Self {
            api_base_url,
            state_dir,
        })
    }
}
