//! Generic CRUD endpoint family.
//!
//! Every resource kind exposes the identical operation shape against the
//! API: `list`, `get`, `create`, `update`, `delete`. The fallback error
//! messages are fixed per kind ("Failed to fetch properties", ...).

use std::marker::PhantomData;

use reqwest::Method;
use serde_json::Value;

use luxeboard_core::RecordIdentity;

use super::{ApiClient, ApiError, normalize_list};
use crate::models::{
    BookingRecord, GuestRecord, PaymentRecord, PermissionRecord, PropertyRecord, TaskRecord,
    UserRecord,
};

/// A record kind served by the uniform CRUD surface.
pub trait ResourceRecord: Sized + Send {
    /// URL path segment and plural noun ("properties").
    const PATH: &'static str;
    /// Singular noun for per-record failure messages ("property").
    const NAME: &'static str;

    /// Normalize a loose API record into the canonical shape.
    fn from_api(value: &Value) -> Self;

    /// The record's dual-key identity.
    fn identity(&self) -> &RecordIdentity;
}

macro_rules! impl_resource_record {
    ($record:ty, $path:literal, $name:literal) => {
        impl ResourceRecord for $record {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;

            fn from_api(value: &Value) -> Self {
                Self::from_value(value)
            }

            fn identity(&self) -> &RecordIdentity {
                &self.identity
            }
        }
    };
}

impl_resource_record!(PropertyRecord, "properties", "property");
impl_resource_record!(BookingRecord, "bookings", "booking");
impl_resource_record!(GuestRecord, "guests", "guest");
impl_resource_record!(PaymentRecord, "payments", "payment");
impl_resource_record!(TaskRecord, "tasks", "task");
impl_resource_record!(UserRecord, "users", "user");
impl_resource_record!(PermissionRecord, "permissions", "permission");

/// CRUD operations for one resource kind.
#[derive(Debug, Clone, Copy)]
pub struct ResourceEndpoint<'a, T> {
    client: &'a ApiClient,
    _marker: PhantomData<T>,
}

impl<'a, T: ResourceRecord> ResourceEndpoint<'a, T> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            _marker: PhantomData,
        }
    }

    /// `GET /{path}` - the whole collection, in server order. Non-array
    /// bodies coerce to an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response handling fails.
    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        let fallback = format!("Failed to fetch {}", T::PATH);
        let body = self.client.get_value(T::PATH, &fallback).await?;
        Ok(normalize_list(&body, T::from_api))
    }

    /// `GET /{path}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response handling fails.
    pub async fn get(&self, id: &str) -> Result<T, ApiError> {
        let fallback = format!("Failed to fetch {}", T::NAME);
        let body = self
            .client
            .get_value(&format!("{}/{id}", T::PATH), &fallback)
            .await?;
        Ok(T::from_api(&body))
    }

    /// `POST /{path}` - create from a form payload; only the returned
    /// server record is trusted as the new state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response handling fails.
    pub async fn create(&self, payload: &Value) -> Result<T, ApiError> {
        let fallback = format!("Failed to create {}", T::NAME);
        let body = self
            .client
            .send_json(Method::POST, T::PATH, Some(payload), &fallback)
            .await?;
        Ok(T::from_api(&body))
    }

    /// `PUT /{path}/{id}` - wholesale update; the returned record replaces
    /// the local one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response handling fails.
    pub async fn update(&self, id: &str, payload: &Value) -> Result<T, ApiError> {
        let fallback = format!("Failed to update {}", T::NAME);
        let body = self
            .client
            .send_json(
                Method::PUT,
                &format!("{}/{id}", T::PATH),
                Some(payload),
                &fallback,
            )
            .await?;
        Ok(T::from_api(&body))
    }

    /// `DELETE /{path}/{id}` - the body is passed through for callers that
    /// care, but only the success itself matters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response handling fails.
    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        let fallback = format!("Failed to delete {}", T::NAME);
        self.client
            .send_json(Method::DELETE, &format!("{}/{id}", T::PATH), None, &fallback)
            .await
    }
}
