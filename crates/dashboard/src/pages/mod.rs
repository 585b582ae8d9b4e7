//! Page controllers: per-resource load/create/update/delete state machines.
//!
//! Every resource page shares the same lifecycle over its collection, so
//! the state machine lives once in [`CollectionController`] and the page
//! types layer their extras (search, pagination, calendar aggregation,
//! access gating) on top. Controllers never render; they hold the state a
//! view would bind to.

pub mod bookings;
pub mod guests;
pub mod payments;
pub mod properties;
pub mod tasks;
pub mod users;

pub use bookings::{BookingsPage, DayCount};
pub use guests::{GuestsPage, PAGE_SIZE};
pub use payments::PaymentsPage;
pub use properties::PropertiesPage;
pub use tasks::TasksPage;
pub use users::{UsersAccess, UsersPage};

use std::collections::HashSet;

use serde_json::Value;
use tracing::warn;

use crate::api::{ApiError, ResourceEndpoint, ResourceRecord};

/// Shared per-collection page state.
///
/// A load is identified by the epoch it started in; deactivating the page
/// bumps the epoch so an in-flight completion is discarded instead of
/// mutating a page the user has already left.
#[derive(Debug, Clone)]
pub struct CollectionController<T> {
    collection: Vec<T>,
    loading: bool,
    error: Option<String>,
    selected: Option<T>,
    create_open: bool,
    deleting: HashSet<String>,
    pending_delete: Option<String>,
    epoch: u64,
}

impl<T> Default for CollectionController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionController<T> {
    /// An empty controller in its initial loading state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection: Vec::new(),
            loading: true,
            error: None,
            selected: None,
            create_open: false,
            deleting: HashSet::new(),
            pending_delete: None,
            epoch: 0,
        }
    }

    /// The collection, in server order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.collection
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The record currently opened for editing.
    #[must_use]
    pub const fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn is_create_open(&self) -> bool {
        self.create_open
    }

    /// The id awaiting delete confirmation, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Whether a delete for `id` is currently in flight.
    #[must_use]
    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
    }

    pub fn select(&mut self, record: T) {
        self.selected = Some(record);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Mark the page left; any load still in flight becomes stale.
    pub fn deactivate(&mut self) {
        self.epoch += 1;
    }

    /// Start a load: flip into the loading state, clear the previous
    /// failure, and hand back the epoch the completion must present.
    pub fn begin_load(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.epoch
    }

    /// Complete a load started at `epoch`.
    ///
    /// Stale completions (page deactivated since [`Self::begin_load`]) are
    /// dropped without touching any state; returns whether the result was
    /// applied so callers holding sibling data from the same fetch can
    /// discard it too. Success replaces the collection wholesale; failure
    /// keeps the previous records visible alongside the message.
    pub fn finish_load(&mut self, epoch: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        match result {
            Ok(records) => self.collection = records,
            Err(err) => {
                warn!(error = %err, "Collection load failed");
                self.error = Some(err.message());
            }
        }
        self.loading = false;
        true
    }

    /// Complete a create. Success appends the server's record and closes
    /// the create modal; failure leaves the modal open with the message so
    /// the form input survives. Returns whether the create succeeded.
    pub fn finish_create(&mut self, result: Result<T, ApiError>) -> bool {
        match result {
            Ok(record) => {
                self.collection.push(record);
                self.create_open = false;
                self.error = None;
                true
            }
            Err(err) => {
                self.error = Some(err.message());
                false
            }
        }
    }

    /// Flag `id` for deletion pending confirmation.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    /// Withdraw the pending confirmation without deleting.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Take the confirmed id, clearing the confirmation state regardless of
    /// what the caller does with it next.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Mark a delete for `id` in flight. Returns false (and does nothing)
    /// when one is already running for that id; deletes for other ids are
    /// unaffected.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.deleting.contains(id) {
            return false;
        }
        self.deleting.insert(id.to_owned());
        true
    }
}

impl<T: ResourceRecord> CollectionController<T> {
    /// Complete an update of `id`. Success replaces the matching record
    /// in place (server record wins, no merging) and closes the edit
    /// selection; failure keeps the selection so the user can retry.
    /// Returns whether the update succeeded.
    pub fn finish_update(&mut self, id: &str, result: Result<T, ApiError>) -> bool {
        match result {
            Ok(record) => {
                if let Some(slot) = self
                    .collection
                    .iter_mut()
                    .find(|r| r.identity().matches(id))
                {
                    *slot = record;
                }
                self.selected = None;
                self.error = None;
                true
            }
            Err(err) => {
                self.error = Some(err.message());
                false
            }
        }
    }

    /// Complete a delete of `id`. Success removes every record matching
    /// the id on either identity key; failure surfaces the message and
    /// leaves the row. The in-flight marker clears either way.
    pub fn finish_delete(&mut self, id: &str, result: Result<Value, ApiError>) {
        match result {
            Ok(_) => self.collection.retain(|r| !r.identity().matches(id)),
            Err(err) => {
                warn!(error = %err, id, "Delete failed");
                self.error = Some(err.message());
            }
        }
        self.deleting.remove(id);
    }

    /// Fetch the whole collection through `endpoint`.
    pub async fn load(&mut self, endpoint: ResourceEndpoint<'_, T>) {
        let epoch = self.begin_load();
        let result = endpoint.list().await;
        self.finish_load(epoch, result);
    }

    /// Create a record through `endpoint`; see [`Self::finish_create`].
    pub async fn create(&mut self, endpoint: ResourceEndpoint<'_, T>, payload: &Value) -> bool {
        let result = endpoint.create(payload).await;
        self.finish_create(result)
    }

    /// Update `id` through `endpoint`; see [`Self::finish_update`].
    pub async fn update(
        &mut self,
        endpoint: ResourceEndpoint<'_, T>,
        id: &str,
        payload: &Value,
    ) -> bool {
        let result = endpoint.update(id, payload).await;
        self.finish_update(id, result)
    }

    /// Delete `id` through `endpoint`, unless a delete for that id is
    /// already in flight.
    pub async fn delete(&mut self, endpoint: ResourceEndpoint<'_, T>, id: &str) {
        if !self.begin_delete(id) {
            return;
        }
        let result = endpoint.delete(id).await;
        self.finish_delete(id, result);
    }
}
