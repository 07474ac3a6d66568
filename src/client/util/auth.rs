#[cfg(feature = "web")]
use crate::model::driver::{AuthDto, LoginDto, ProfileDto, RegisterDriverDto};

/// Register a new driver account via the API
#[cfg(feature = "web")]
pub async fn register(payload: &RegisterDriverDto) -> Result<AuthDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(payload)
        .map_err(|e| format!("Failed to encode registration: {}", e))?;

    let response = Request::post("/api/drivers/registro")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        201 => response
            .json::<AuthDto>()
            .await
            .map_err(|e| format!("Failed to parse registration data: {}", e)),
        _ => Err(super::envelope_error(response).await),
    }
}

/// Log in with email and password via the API
#[cfg(feature = "web")]
pub async fn login(email: &str, password: &str) -> Result<AuthDto, String> {
    use reqwasm::http::Request;

    let payload = LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    };
    let body =
        serde_json::to_string(&payload).map_err(|e| format!("Failed to encode login: {}", e))?;

    let response = Request::post("/api/drivers/login")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<AuthDto>()
            .await
            .map_err(|e| format!("Failed to parse login data: {}", e)),
        _ => Err(super::envelope_error(response).await),
    }
}

/// Retrieve the logged-in driver's profile from the API
#[cfg(feature = "web")]
pub async fn fetch_profile(token: &str) -> Result<ProfileDto, String> {
    use reqwasm::http::Request;

    let response = Request::get("/api/drivers/perfil")
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<ProfileDto>()
            .await
            .map_err(|e| format!("Failed to parse profile data: {}", e)),
        _ => Err(super::envelope_error(response).await),
    }
}
