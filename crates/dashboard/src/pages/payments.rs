//! Payments page.

use crate::api::ApiClient;
use crate::models::PaymentRecord;
use crate::session::AuthState;

use super::CollectionController;

/// The payment history page.
#[derive(Debug, Clone)]
pub struct PaymentsPage {
    api: ApiClient,
    pub controller: CollectionController<PaymentRecord>,
}

impl PaymentsPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            controller: CollectionController::new(),
        }
    }

    /// Load the collection. Unauthenticated sessions skip the fetch.
    pub async fn load(&mut self, auth: &AuthState) {
        if !auth.is_authenticated() {
            return;
        }
        self.controller.load(self.api.payments()).await;
    }
}
