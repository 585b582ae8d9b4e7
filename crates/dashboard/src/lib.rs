//! LuxeBoard Dashboard - application layer.
//!
//! Everything between the presentation layer and the remote REST API:
//!
//! - [`session`] - Durable session store, reactive auth state, route guard
//! - [`api`] - Uniform CRUD client for every resource kind
//! - [`models`] - Canonical record shapes normalized from loose API JSON
//! - [`pages`] - Per-page collection controllers (load/create/update/delete)
//! - [`services`] - Login, registration, and profile flows
//! - [`nav`] - Role-based navigation filtering
//!
//! Role gating here is advisory UI filtering only. The remote API does not
//! enforce roles; nothing in this crate is a security boundary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod nav;
pub mod pages;
pub mod services;
pub mod session;

pub use config::DashboardConfig;
pub use error::AppError;
