#[cfg(feature = "web")]
use crate::model::complaint::ComplaintPageDto;

/// Retrieve the first page of complaints; the dashboard only reads `total`.
#[cfg(feature = "web")]
pub async fn list(token: &str) -> Result<ComplaintPageDto, String> {
    use reqwasm::http::Request;

    let response = Request::get("/api/reclamacoes")
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<ComplaintPageDto>()
            .await
            .map_err(|e| format!("Failed to parse complaint list: {}", e)),
        _ => Err(super::envelope_error(response).await),
    }
}
