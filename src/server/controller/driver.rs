use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        driver::{AuthDto, DriverProfileDto, LoginDto, ProfileDto, RegisterDriverDto},
    },
    server::{
        error::Error, middleware::AuthDriver, model::app::AppState, service::auth::AuthService,
    },
};

pub static DRIVER_TAG: &str = "driver";

/// Register a new driver account
///
/// # Responses
/// - 201 (Created): Driver created; body carries the bearer token
/// - 400 (Bad Request): Missing/malformed fields or email already registered
/// - 500 (Internal Server Error): Database or hashing failure
#[utoipa::path(
    post,
    path = "/api/drivers/registro",
    tag = DRIVER_TAG,
    request_body = RegisterDriverDto,
    responses(
        (status = 201, description = "Driver registered, token issued", body = AuthDto),
        (status = 400, description = "Validation failure or duplicate email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDriverDto>,
) -> Result<impl IntoResponse, Error> {
    let (token, driver) = AuthService::new(&state.db, &state.jwt)
        .register(&payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthDto {
            success: true,
            token,
            driver,
        }),
    ))
}

/// Log in with email and password
///
/// # Responses
/// - 200 (OK): Credentials accepted; body carries the bearer token
/// - 401 (Unauthorized): Unknown email or wrong password, indistinguishable
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/drivers/login",
    tag = DRIVER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login accepted, token issued", body = AuthDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let (token, driver) = AuthService::new(&state.db, &state.jwt)
        .login(&payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthDto {
            success: true,
            token,
            driver,
        }),
    ))
}

/// Get the logged-in driver's profile
///
/// # Responses
/// - 200 (OK): Profile of the token's driver
/// - 401 (Unauthorized): Missing or invalid bearer token
/// - 404 (Not Found): Token references a driver that no longer exists
#[utoipa::path(
    get,
    path = "/api/drivers/perfil",
    tag = DRIVER_TAG,
    responses(
        (status = 200, description = "Profile of the logged in driver", body = ProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto)
    ),
)]
pub async fn profile(AuthDriver(driver): AuthDriver) -> Result<impl IntoResponse, Error> {
    Ok((
        StatusCode::OK,
        Json(ProfileDto {
            success: true,
            driver: DriverProfileDto {
                id: driver.id,
                name: driver.name,
                email: driver.email,
                company: driver.company,
                phone: driver.phone,
                created_at: driver.created_at,
            },
        }),
    ))
}
