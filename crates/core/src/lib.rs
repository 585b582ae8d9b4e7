//! LuxeBoard Core - Shared types library.
//!
//! This crate provides common types used across all LuxeBoard components:
//! - `dashboard` - Application layer for the hospitality ops dashboard
//! - `integration-tests` - End-to-end tests against a mock API
//!
//! # Architecture
//!
//! The core crate contains only types and small pure helpers - no I/O, no
//! HTTP clients, no storage access. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Record identity, roles, emails, and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
