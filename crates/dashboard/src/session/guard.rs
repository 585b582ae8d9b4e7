//! Route guard for protected views.

use super::AuthState;

/// Destination for unauthenticated redirects.
pub const LOGIN_PATH: &str = "/login";

/// What the caller should render (and whether to navigate) after an
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOutcome {
    /// Whether a token is present.
    pub is_authenticated: bool,
    /// Whether the session is still loading; nothing conclusive should be
    /// rendered while true.
    pub is_loading: bool,
    /// A redirect to initiate, issued at most once per unauthenticated
    /// stretch.
    pub redirect: Option<&'static str>,
}

/// Redirects to the login view once the session has loaded without a token.
///
/// Re-evaluate whenever the auth state changes. The redirect fires exactly
/// once; it re-arms only after the session becomes authenticated again, so
/// a later logout redirects anew.
#[derive(Debug, Default)]
pub struct RouteGuard {
    redirected: bool,
}

impl RouteGuard {
    /// Create a guard that has not yet redirected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the guard against the current auth state.
    pub fn evaluate(&mut self, state: &AuthState) -> GuardOutcome {
        let is_authenticated = state.is_authenticated();

        if state.loading {
            return GuardOutcome {
                is_authenticated,
                is_loading: true,
                redirect: None,
            };
        }

        let redirect = if is_authenticated {
            self.redirected = false;
            None
        } else if self.redirected {
            None
        } else {
            self.redirected = true;
            Some(LOGIN_PATH)
        };

        GuardOutcome {
            is_authenticated,
            is_loading: false,
            redirect,
        }
    }
}
