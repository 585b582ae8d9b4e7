//! Auth service error types.

use thiserror::Error;

use crate::api::ApiError;

/// Errors that can occur during login, registration, and profile flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Client-side presence/shape validation failed; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The API call itself failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The API reported success but no token could be found anywhere in
    /// the response envelope.
    #[error("{context} succeeded but no token was returned.")]
    MissingTokenInResponse {
        /// "Login" or "Registration".
        context: &'static str,
    },
}

impl AuthError {
    /// The message to render inline in the active form.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_messages() {
        let err = AuthError::MissingTokenInResponse { context: "Login" };
        assert_eq!(
            err.to_string(),
            "Login succeeded but no token was returned."
        );

        let err = AuthError::MissingTokenInResponse {
            context: "Registration",
        };
        assert_eq!(
            err.to_string(),
            "Registration succeeded but no token was returned."
        );
    }
}
