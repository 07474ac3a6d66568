pub mod auth;
pub mod complaint;
pub mod customer;

/// Extract the envelope's error message from a non-2xx response, falling
/// back to the raw body.
#[cfg(feature = "web")]
pub(crate) async fn envelope_error(response: reqwasm::http::Response) -> String {
    use crate::model::api::ErrorDto;

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    }
}
