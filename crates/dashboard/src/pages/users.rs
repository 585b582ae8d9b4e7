//! User management page, gated to admins.
//!
//! The gate is advisory UI filtering: a non-admin is shown the denied view
//! instead of the table, but nothing here prevents direct API calls.

use crate::api::ApiClient;
use crate::models::UserRecord;
use crate::session::AuthState;

use super::CollectionController;

/// What the gate decided for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersAccess {
    /// Session state is still loading; render nothing yet.
    Pending,
    /// The logged-in user is an admin.
    Granted,
    /// Logged in without the Admin role, or no user record at all.
    Denied,
}

/// The user management page.
#[derive(Debug, Clone)]
pub struct UsersPage {
    api: ApiClient,
    pub controller: CollectionController<UserRecord>,
}

impl UsersPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            controller: CollectionController::new(),
        }
    }

    /// Evaluate the admin gate for `auth`: a stored token and an Admin
    /// user record are both required.
    #[must_use]
    pub fn access(auth: &AuthState) -> UsersAccess {
        if auth.loading {
            return UsersAccess::Pending;
        }
        if !auth.is_authenticated() {
            return UsersAccess::Denied;
        }
        if auth.user.as_ref().is_some_and(UserRecord::is_admin) {
            UsersAccess::Granted
        } else {
            UsersAccess::Denied
        }
    }

    /// Load the collection; only a granted session fetches.
    pub async fn load(&mut self, auth: &AuthState) {
        if Self::access(auth) != UsersAccess::Granted {
            return;
        }
        self.controller.load(self.api.users()).await;
    }

    /// Run the delete the user confirmed, if any is pending and not
    /// already in flight.
    pub async fn confirm_pending_delete(&mut self) {
        if let Some(id) = self.controller.confirm_delete() {
            self.controller.delete(self.api.users(), &id).await;
        }
    }
}
