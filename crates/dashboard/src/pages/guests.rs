//! Guests page: search plus client-side pagination.

use crate::api::ApiClient;
use crate::models::GuestRecord;
use crate::session::AuthState;

use super::CollectionController;

/// Guests shown per page.
pub const PAGE_SIZE: usize = 5;

/// The guest directory page.
///
/// Search and pagination are purely client-side over the loaded
/// collection; changing the query always snaps back to the first page so
/// the narrowed result set is visible from its start.
#[derive(Debug, Clone)]
pub struct GuestsPage {
    api: ApiClient,
    pub controller: CollectionController<GuestRecord>,
    query: String,
    page: usize,
}

impl GuestsPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            controller: CollectionController::new(),
            query: String::new(),
            page: 1,
        }
    }

    /// Load the collection. Unauthenticated sessions skip the fetch.
    pub async fn load(&mut self, auth: &AuthState) {
        if !auth.is_authenticated() {
            return;
        }
        self.controller.load(self.api.guests()).await;
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Update the search query and reset to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Jump to `page`, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Guests matching the current query, in server order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&GuestRecord> {
        self.controller
            .records()
            .iter()
            .filter(|guest| guest.matches_query(&self.query))
            .collect()
    }

    /// Number of pages in the filtered set; at least 1 even when empty.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE).max(1)
    }

    /// The slice of the filtered set on the current page.
    #[must_use]
    pub fn page_items(&self) -> Vec<&GuestRecord> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use serde_json::json;

    fn page_with(count: usize) -> GuestsPage {
        let api = ApiClient::new("http://127.0.0.1:1", SessionStore::in_memory());
        let mut page = GuestsPage::new(api);
        let records = (0..count)
            .map(|i| {
                GuestRecord::from_value(&json!({
                    "id": format!("GS-{i:03}"),
                    "name": format!("Guest {i}"),
                    "email": format!("guest{i}@luxe.stay"),
                }))
            })
            .collect();
        let epoch = page.controller.begin_load();
        page.controller.finish_load(epoch, Ok(records));
        page
    }

    #[test]
    fn test_pagination_slices() {
        let mut page = page_with(12);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.page_items().len(), PAGE_SIZE);

        page.set_page(3);
        let items = page.page_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_deref(), Some("Guest 10"));

        // Out-of-range pages clamp.
        page.set_page(99);
        assert_eq!(page.page(), 3);
        page.set_page(0);
        assert_eq!(page.page(), 1);
    }

    #[test]
    fn test_query_filters_and_resets_page() {
        let mut page = page_with(12);
        page.set_page(3);

        page.set_query("guest 1");
        assert_eq!(page.page(), 1);
        // "Guest 1", "Guest 10", "Guest 11".
        assert_eq!(page.filtered().len(), 3);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_empty_filtered_set_has_one_page() {
        let mut page = page_with(4);
        page.set_query("no such guest");
        assert!(page.page_items().is_empty());
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.page(), 1);
    }
}
