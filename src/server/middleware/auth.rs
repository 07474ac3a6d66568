use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    data::driver::DriverRepository,
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// The authenticated driver for a request, extracted from the bearer token.
///
/// Extraction fails with the appropriate envelope response when the
/// Authorization header is absent, the token does not verify, or the driver
/// the token references no longer exists. The token is the sole credential;
/// there is no session store and no revocation.
pub struct AuthDriver(pub entity::driver::Model);

impl FromRequestParts<AppState> for AuthDriver {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let claims = state.jwt.verify(token)?;

        let driver = DriverRepository::new(&state.db)
            .get_by_id(claims.sub)
            .await?
            .ok_or(AuthError::DriverNotFound(claims.sub))?;

        Ok(AuthDriver(driver))
    }
}
