use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Public identity of a driver, returned by registration and login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DriverDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: String,
}

/// Full own-profile view, password hash excluded.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DriverProfileDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Display fields used when a driver is referenced from another record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DriverRefDto {
    pub id: i32,
    pub name: String,
    pub company: String,
}

#[derive(Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RegisterDriverDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company: String,
    pub phone: Option<String>,
}

#[derive(Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Successful registration/login response: bearer token plus identity.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AuthDto {
    pub success: bool,
    pub token: String,
    pub driver: DriverDto,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProfileDto {
    pub success: bool,
    pub driver: DriverProfileDto,
}
