//! Bookings page: the collection plus its supporting property list and a
//! seven-day check-in calendar.

use chrono::{Duration, NaiveDate};

use crate::api::ApiClient;
use crate::models::{BookingRecord, PropertyRecord};
use crate::session::AuthState;

use super::CollectionController;

/// Number of days shown in the check-in calendar strip, today included.
const CALENDAR_DAYS: i64 = 7;

/// One calendar cell: a date and how many bookings check in that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// The bookings page.
///
/// Bookings and the property list load together; either failing fails the
/// whole load, since the booking form is useless without properties to
/// assign.
#[derive(Debug, Clone)]
pub struct BookingsPage {
    api: ApiClient,
    pub bookings: CollectionController<BookingRecord>,
    properties: Vec<PropertyRecord>,
}

impl BookingsPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            bookings: CollectionController::new(),
            properties: Vec::new(),
        }
    }

    /// Load bookings and properties together. Unauthenticated sessions
    /// skip the fetch.
    pub async fn load(&mut self, auth: &AuthState) {
        if !auth.is_authenticated() {
            return;
        }
        let epoch = self.bookings.begin_load();
        let bookings_endpoint = self.api.bookings();
        let properties_endpoint = self.api.properties();
        match tokio::try_join!(bookings_endpoint.list(), properties_endpoint.list()) {
            Ok((bookings, properties)) => {
                // The property list follows the same staleness rule as the
                // bookings collection.
                if self.bookings.finish_load(epoch, Ok(bookings)) {
                    self.properties = properties;
                }
            }
            Err(err) => {
                self.bookings.finish_load(epoch, Err(err));
            }
        }
    }

    /// Property names for the booking form's assignment picker.
    #[must_use]
    pub fn property_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter_map(|p| p.name.as_deref())
            .collect()
    }

    /// The seven-day check-in strip starting at `today`.
    ///
    /// Each cell counts the bookings whose check-in date falls on that day;
    /// bookings without a parseable check-in never appear.
    #[must_use]
    pub fn calendar(&self, today: NaiveDate) -> Vec<DayCount> {
        (0..CALENDAR_DAYS)
            .map(|offset| {
                let date = today + Duration::days(offset);
                let count = self
                    .bookings
                    .records()
                    .iter()
                    .filter(|b| b.check_in == Some(date))
                    .count();
                DayCount { date, count }
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use serde_json::json;

    fn page_with(check_ins: &[&str]) -> BookingsPage {
        let api = ApiClient::new("http://127.0.0.1:1", SessionStore::in_memory());
        let mut page = BookingsPage::new(api);
        let records = check_ins
            .iter()
            .enumerate()
            .map(|(i, check_in)| {
                BookingRecord::from_value(&json!({
                    "id": format!("BK-{i}"),
                    "checkIn": check_in,
                }))
            })
            .collect();
        let epoch = page.bookings.begin_load();
        page.bookings.finish_load(epoch, Ok(records));
        page
    }

    #[test]
    fn test_calendar_counts_check_ins_per_day() {
        let page = page_with(&[
            "2025-11-12",
            "2025-11-12",
            "2025-11-12",
            "2025-11-13",
            "2025-11-20", // outside the window
            "not-a-date",
        ]);
        let today = NaiveDate::from_ymd_opt(2025, 11, 12).unwrap();

        let strip = page.calendar(today);
        assert_eq!(strip.len(), 7);
        assert_eq!(strip[0].date, today);
        let counts: Vec<_> = strip.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![3, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_calendar_on_empty_collection() {
        let page = page_with(&[]);
        let today = NaiveDate::from_ymd_opt(2025, 11, 12).unwrap();
        assert!(page.calendar(today).iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_property_names_skip_unnamed() {
        let api = ApiClient::new("http://127.0.0.1:1", SessionStore::in_memory());
        let mut page = BookingsPage::new(api);
        page.properties = vec![
            PropertyRecord::from_value(&json!({"id": "PR-1", "name": "Bayview Retreat"})),
            PropertyRecord::from_value(&json!({"id": "PR-2"})),
        ];
        assert_eq!(page.property_names(), vec!["Bayview Retreat"]);
    }
}
