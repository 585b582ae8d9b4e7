//! REST client for the remote hospitality API.
//!
//! One uniform request layer for every resource kind: identical CRUD
//! families through [`ResourceEndpoint`], plus the auth endpoints. Success
//! bodies are passed through as parsed JSON (no schema validation beyond
//! normalization); failures are reduced to a single human-readable message.
//!
//! No retries, no client-side timeouts, no request cancellation - every
//! failure surfaces once, terminally.

mod auth;
mod error;
mod resource;

pub use auth::{extract_token, extract_user};
pub use error::ApiError;
pub use resource::{ResourceEndpoint, ResourceRecord};

use reqwest::{Client, Method, Response};
use serde_json::Value;
use tracing::{debug, instrument};

use secrecy::{ExposeSecret, SecretString};

use crate::config::DashboardConfig;
use crate::models::{
    BookingRecord, GuestRecord, PaymentRecord, PermissionRecord, PropertyRecord, TaskRecord,
    UserRecord,
};
use crate::session::SessionStore;

/// Client for the remote REST API.
///
/// Cheap to clone; holds the session store so authenticated calls can read
/// the bearer token at request time.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client against `base_url` (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            session,
        }
    }

    /// Create a client from loaded configuration.
    #[must_use]
    pub fn from_config(config: &DashboardConfig, session: SessionStore) -> Self {
        Self::new(config.api_base_url.clone(), session)
    }

    /// The session store backing authenticated calls.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    // =========================================================================
    // Resource endpoints
    // =========================================================================

    #[must_use]
    pub const fn properties(&self) -> ResourceEndpoint<'_, PropertyRecord> {
        ResourceEndpoint::new(self)
    }

    #[must_use]
    pub const fn bookings(&self) -> ResourceEndpoint<'_, BookingRecord> {
        ResourceEndpoint::new(self)
    }

    #[must_use]
    pub const fn guests(&self) -> ResourceEndpoint<'_, GuestRecord> {
        ResourceEndpoint::new(self)
    }

    #[must_use]
    pub const fn payments(&self) -> ResourceEndpoint<'_, PaymentRecord> {
        ResourceEndpoint::new(self)
    }

    #[must_use]
    pub const fn tasks(&self) -> ResourceEndpoint<'_, TaskRecord> {
        ResourceEndpoint::new(self)
    }

    #[must_use]
    pub const fn users(&self) -> ResourceEndpoint<'_, UserRecord> {
        ResourceEndpoint::new(self)
    }

    #[must_use]
    pub const fn permissions(&self) -> ResourceEndpoint<'_, PermissionRecord> {
        ResourceEndpoint::new(self)
    }

    /// `GET /tasks?status=` - the only query-parameter listing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response handling fails.
    #[instrument(skip(self))]
    pub async fn tasks_with_status(&self, status: &str) -> Result<Vec<TaskRecord>, ApiError> {
        let response = self
            .http
            .get(self.url("tasks"))
            .query(&[("status", status)])
            .send()
            .await?;
        let body = handle_response(response, "Failed to fetch tasks by status").await?;
        Ok(normalize_list(&body, TaskRecord::from_value))
    }

    /// `GET /users/roles/list` - the assignable role names.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response handling fails.
    #[instrument(skip(self))]
    pub async fn user_roles(&self) -> Result<Vec<String>, ApiError> {
        let body = self.get_value("users/roles/list", "Failed to fetch roles").await?;
        Ok(normalize_list(&body, |v| {
            v.as_str().unwrap_or_default().to_owned()
        })
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect())
    }

    // =========================================================================
    // Request plumbing (crate-visible for the resource and auth modules)
    // =========================================================================

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) async fn get_value(&self, path: &str, fallback: &str) -> Result<Value, ApiError> {
        debug!(path, "API GET");
        let response = self.http.get(self.url(path)).send().await?;
        handle_response(response, fallback).await
    }

    /// Issue a mutating request with a JSON body (`Content-Type` set by
    /// reqwest's `json`).
    pub(crate) async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        fallback: &str,
    ) -> Result<Value, ApiError> {
        debug!(%method, path, "API request");
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        handle_response(response, fallback).await
    }

    /// The stored bearer token, or [`ApiError::MissingToken`] without any
    /// network I/O.
    pub(crate) fn require_token(&self) -> Result<SecretString, ApiError> {
        self.session.token().ok_or(ApiError::MissingToken)
    }

    /// Issue an authenticated request carrying `Authorization: Bearer`.
    pub(crate) async fn send_authenticated(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        fallback: &str,
    ) -> Result<Value, ApiError> {
        let token = self.require_token()?;
        debug!(%method, path, "Authenticated API request");
        let mut request = self
            .http
            .request(method, self.url(path))
            .bearer_auth(token.expose_secret());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        handle_response(response, fallback).await
    }
}

/// Normalize a list-shaped body; anything else coerces to empty.
pub(crate) fn normalize_list<T>(body: &Value, normalize: impl Fn(&Value) -> T) -> Vec<T> {
    body.as_array()
        .map(|items| items.iter().map(&normalize).collect())
        .unwrap_or_default()
}

/// Uniform response handling: pass successful JSON bodies through verbatim,
/// reduce failures to a single message.
async fn handle_response(response: Response, fallback: &str) -> Result<Value, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Api(error_message(&body, fallback)))
}

/// Extract a human-readable failure message from an error body.
///
/// Priority: JSON `error` field, JSON `message` field, raw non-empty text
/// (only when the body is not JSON), the caller's fallback.
fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return value
            .get("error")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str)
            .map_or_else(|| fallback.to_owned(), ToOwned::to_owned);
    }
    let text = body.trim();
    if text.is_empty() {
        fallback.to_owned()
    } else {
        body.to_owned()
    }
}
