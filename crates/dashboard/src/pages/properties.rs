//! Properties page.

use crate::api::ApiClient;
use crate::models::PropertyRecord;
use crate::session::AuthState;

use super::CollectionController;

/// The property listings page.
#[derive(Debug, Clone)]
pub struct PropertiesPage {
    api: ApiClient,
    pub controller: CollectionController<PropertyRecord>,
}

impl PropertiesPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            controller: CollectionController::new(),
        }
    }

    /// Load the collection. Unauthenticated sessions skip the fetch; the
    /// route guard is already redirecting.
    pub async fn load(&mut self, auth: &AuthState) {
        if !auth.is_authenticated() {
            return;
        }
        self.controller.load(self.api.properties()).await;
    }
}
