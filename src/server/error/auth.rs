use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header absent or not a bearer token")]
    MissingToken,
    #[error("Bearer token failed verification")]
    InvalidToken,
    #[error("Driver ID {0:?} from a valid token not found in database")]
    DriverNotFound(i32),
    #[error("Login rejected for invalid credentials")]
    InvalidCredentials,
    #[error("Registration rejected, email already in use")]
    EmailRegistered,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Token not provided, access denied",
            ),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Self::DriverNotFound(_) => (StatusCode::NOT_FOUND, "Driver not found"),
            // Identical body for unknown email and wrong password; the client
            // must not learn which one failed.
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::EmailRegistered => (StatusCode::BAD_REQUEST, "Email already registered"),
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
