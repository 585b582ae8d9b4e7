//! Application services composing the API client and the session store.

pub mod auth;
