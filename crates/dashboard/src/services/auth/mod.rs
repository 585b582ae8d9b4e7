//! Login, registration, and profile flows.
//!
//! Authentication itself happens on the remote API; this service validates
//! form input client-side, interprets the varying response envelopes, and
//! persists the issued credential through the session store.

mod error;

pub use error::AuthError;

use serde_json::json;
use tracing::{info, instrument};

use luxeboard_core::Email;

use crate::api::{ApiClient, extract_token, extract_user};
use crate::models::UserRecord;
use crate::session::SessionStore;

/// An established session as returned by login/registration.
#[derive(Debug, Clone)]
pub struct EstablishedSession {
    /// The issued bearer token, already persisted.
    pub token: String,
    /// The user record, when the envelope carried one.
    pub user: Option<UserRecord>,
}

/// Auth flows over the API client and session store.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
    store: SessionStore,
}

impl AuthService {
    /// Create the service. The store should be the same one the API client
    /// reads tokens from.
    #[must_use]
    pub const fn new(api: ApiClient, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] before any request when a field is
    /// missing or the email is malformed, [`AuthError::Api`] when the call
    /// fails, and [`AuthError::MissingTokenInResponse`] when the envelope
    /// carries no recognizable token.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<EstablishedSession, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required.".to_owned(),
            ));
        }
        let email =
            Email::parse(email).map_err(|e| AuthError::Validation(e.to_string()))?;

        let envelope = self
            .api
            .login(&json!({"email": email.as_str(), "password": password}))
            .await?;
        self.establish(&envelope, "Login")
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AuthService::login`].
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<EstablishedSession, AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Name, email, and password are required.".to_owned(),
            ));
        }
        let email =
            Email::parse(email).map_err(|e| AuthError::Validation(e.to_string()))?;

        let envelope = self
            .api
            .register(&json!({
                "name": name,
                "email": email.as_str(),
                "password": password,
            }))
            .await?;
        self.establish(&envelope, "Registration")
    }

    /// Clear both session keys.
    pub fn logout(&self) {
        self.store.clear_token();
        self.store.clear_user();
        info!("Session cleared");
    }

    /// Update the logged-in profile and refresh the stored user record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] when the call fails (including the
    /// missing-token short circuit).
    pub async fn update_profile(&self, payload: &serde_json::Value) -> Result<UserRecord, AuthError> {
        let user = self.api.update_profile(payload).await?;
        self.store.set_user(Some(&user));
        Ok(user)
    }

    /// Change the account password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] when either field is missing, or
    /// [`AuthError::Api`] when the call fails.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(AuthError::Validation(
                "Current and new password are required.".to_owned(),
            ));
        }
        self.api
            .change_password(current_password, new_password)
            .await?;
        Ok(())
    }

    /// Interpret an auth envelope and persist the session.
    fn establish(
        &self,
        envelope: &serde_json::Value,
        context: &'static str,
    ) -> Result<EstablishedSession, AuthError> {
        let token =
            extract_token(envelope).ok_or(AuthError::MissingTokenInResponse { context })?;
        let user = extract_user(envelope);

        self.store.set_token(&token);
        self.store.set_user(user.as_ref());
        info!(has_user = user.is_some(), "Session established");

        Ok(EstablishedSession { token, user })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        let store = SessionStore::in_memory();
        // Unroutable address: these tests must fail before any request.
        let api = ApiClient::new("http://127.0.0.1:1", store.clone());
        AuthService::new(api, store)
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let service = service();
        let err = service.login("", "secret").await.unwrap_err();
        assert_eq!(err.message(), "Email and password are required.");

        let err = service.login("nora@luxehost.com", "").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_email() {
        let service = service();
        let err = service.login("not-an-email", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let service = service();
        let err = service
            .register("", "nora@luxehost.com", "secret")
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Name, email, and password are required.");
    }
}
