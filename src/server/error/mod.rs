//! Error types for the fraudwatch server.
//!
//! Domain-specific error enums plus a unified [`Error`] aggregating them and
//! external library failures. Everything implements `IntoResponse` so
//! handlers can propagate with `?`; anything without a specific mapping is
//! logged and masked as a generic 500 envelope.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (token extraction/verification, credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A required field is missing or malformed.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// An entity referenced by id does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Internal error indicating a bug in fraudwatch's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(message))).into_response()
            }
            Self::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new(format!("{} not found", entity))),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The real error is logged; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
