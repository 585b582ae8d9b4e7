//! Tasks page, with an optional server-side status filter.

use crate::api::ApiClient;
use crate::models::TaskRecord;
use crate::session::AuthState;

use super::CollectionController;

/// The housekeeping/maintenance task board page.
#[derive(Debug, Clone)]
pub struct TasksPage {
    api: ApiClient,
    pub controller: CollectionController<TaskRecord>,
    status_filter: Option<String>,
}

impl TasksPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            controller: CollectionController::new(),
            status_filter: None,
        }
    }

    /// The active status filter, if any.
    #[must_use]
    pub fn status_filter(&self) -> Option<&str> {
        self.status_filter.as_deref()
    }

    /// Change the status filter and reload with it applied.
    pub async fn set_status_filter(&mut self, auth: &AuthState, status: Option<String>) {
        self.status_filter = status;
        self.load(auth).await;
    }

    /// Load the collection, filtered server-side when a status filter is
    /// active. Unauthenticated sessions skip the fetch.
    pub async fn load(&mut self, auth: &AuthState) {
        if !auth.is_authenticated() {
            return;
        }
        match &self.status_filter {
            None => self.controller.load(self.api.tasks()).await,
            Some(status) => {
                let epoch = self.controller.begin_load();
                let result = self.api.tasks_with_status(status).await;
                self.controller.finish_load(epoch, result);
            }
        }
    }
}
