//! Auth endpoints and response-envelope helpers.
//!
//! Login/registration envelopes vary across deployments (`token`,
//! `accessToken`, nested under `data`); the extraction helpers search the
//! known spots in fixed order. Interpreting the envelope - including
//! failing when no token exists anywhere - is the auth service's job, not
//! this layer's.

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use super::{ApiClient, ApiError};
use crate::models::UserRecord;

/// Pull the bearer token out of a login/registration envelope.
///
/// Checked in order: `token`, `accessToken`, `data.token`,
/// `data.accessToken`.
#[must_use]
pub fn extract_token(envelope: &Value) -> Option<String> {
    let data = envelope.get("data");
    [
        envelope.get("token"),
        envelope.get("accessToken"),
        data.and_then(|d| d.get("token")),
        data.and_then(|d| d.get("accessToken")),
    ]
    .into_iter()
    .flatten()
    .find_map(Value::as_str)
    .map(ToOwned::to_owned)
}

/// Pull the user record out of a login/registration envelope (`user` or
/// `data.user`), normalized.
#[must_use]
pub fn extract_user(envelope: &Value) -> Option<UserRecord> {
    envelope
        .get("user")
        .or_else(|| envelope.get("data").and_then(|d| d.get("user")))
        .filter(|v| v.is_object())
        .map(UserRecord::from_value)
}

impl ApiClient {
    /// `POST /auth/login` - returns the raw envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response handling fails.
    #[instrument(skip(self, payload))]
    pub async fn login(&self, payload: &Value) -> Result<Value, ApiError> {
        self.send_json(Method::POST, "auth/login", Some(payload), "Failed to login")
            .await
    }

    /// `POST /auth/register` - returns the raw envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response handling fails.
    #[instrument(skip(self, payload))]
    pub async fn register(&self, payload: &Value) -> Result<Value, ApiError> {
        self.send_json(
            Method::POST,
            "auth/register",
            Some(payload),
            "Failed to register user",
        )
        .await
    }

    /// `GET /auth/me` - the profile behind the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without network I/O when no token
    /// is stored, or another [`ApiError`] if the call fails.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<UserRecord, ApiError> {
        let body = self
            .send_authenticated(Method::GET, "auth/me", None, "Failed to fetch user data")
            .await?;
        Ok(UserRecord::from_value(&body))
    }

    /// `PUT /auth/me` - update the logged-in profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without network I/O when no token
    /// is stored, or another [`ApiError`] if the call fails.
    #[instrument(skip(self, payload))]
    pub async fn update_profile(&self, payload: &Value) -> Result<UserRecord, ApiError> {
        let body = self
            .send_authenticated(
                Method::PUT,
                "auth/me",
                Some(payload),
                "Failed to update profile",
            )
            .await?;
        Ok(UserRecord::from_value(&body))
    }

    /// `PUT /auth/me/password`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without network I/O when no token
    /// is stored, or another [`ApiError`] if the call fails.
    #[instrument(skip(self, current_password, new_password))]
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Value, ApiError> {
        let payload = serde_json::json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        self.send_authenticated(
            Method::PUT,
            "auth/me/password",
            Some(&payload),
            "Failed to change password",
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_token_order() {
        assert_eq!(
            extract_token(&json!({"token": "a", "accessToken": "b"})).as_deref(),
            Some("a")
        );
        assert_eq!(
            extract_token(&json!({"accessToken": "b"})).as_deref(),
            Some("b")
        );
        assert_eq!(
            extract_token(&json!({"data": {"token": "c"}})).as_deref(),
            Some("c")
        );
        assert_eq!(
            extract_token(&json!({"data": {"accessToken": "d"}})).as_deref(),
            Some("d")
        );
        assert_eq!(extract_token(&json!({"data": {}})), None);
        assert_eq!(extract_token(&json!({"token": 42})), None);
    }

    #[test]
    fn test_extract_user_spots() {
        let user = extract_user(&json!({"user": {"id": "US-01", "name": "Nora"}})).unwrap();
        assert_eq!(user.name, "Nora");

        let nested = extract_user(&json!({"data": {"user": {"id": "US-02"}}})).unwrap();
        assert_eq!(nested.identity.canonical(), Some("US-02"));

        assert!(extract_user(&json!({"user": null})).is_none());
        assert!(extract_user(&json!({})).is_none());
    }
}
