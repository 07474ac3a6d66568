//! HTTP controller endpoints for the fraudwatch web API.
//!
//! Axum handlers for driver auth, the customer registry, and the complaint
//! registry. Controllers translate HTTP to service calls and wrap results in
//! the success/error envelope; utoipa annotations feed the OpenAPI document.

pub mod complaint;
pub mod customer;
pub mod driver;
