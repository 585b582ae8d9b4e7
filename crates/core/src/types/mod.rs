//! Core types for LuxeBoard.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod identity;
pub mod role;
pub mod status;

pub use email::{Email, EmailError};
pub use identity::RecordIdentity;
pub use role::Role;
pub use status::{BookingStatus, PaymentStatus, TaskStatus};
