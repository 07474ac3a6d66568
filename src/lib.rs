//! Fraudwatch: a fraud registry for delivery drivers.
//!
//! Drivers register and look up customers suspected of fraudulent
//! non-delivery claims and file complaints against them. The crate is a
//! Dioxus fullstack application: the shared [`model`] module defines the wire
//! types, and the feature-gated [`server`] module carries the REST backend.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
