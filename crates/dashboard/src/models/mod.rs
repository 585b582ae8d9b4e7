//! Canonical record shapes.
//!
//! The API returns loosely-typed bags with multiple aliases per concept
//! (`checkIn`/`startDate`, `total`/`amount`, ...). Each record kind has a
//! pure `from_value` normalizer applying a fixed fallback order immediately
//! after fetch, so everything downstream operates on one canonical shape
//! instead of repeating fallback chains.

mod booking;
mod fields;
mod guest;
mod payment;
mod permission;
mod property;
mod task;
mod user;

pub use booking::BookingRecord;
pub use guest::GuestRecord;
pub use payment::PaymentRecord;
pub use permission::PermissionRecord;
pub use property::PropertyRecord;
pub use task::TaskRecord;
pub use user::UserRecord;
