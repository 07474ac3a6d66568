#[cfg(feature = "web")]
use crate::model::customer::{CreateCustomerDto, CustomerEnvelopeDto, CustomerPageDto};

/// Filter and pagination state for the customer list page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerQuery {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub postal_code: String,
    pub page: u64,
}

impl CustomerQuery {
    fn to_query_string(&self) -> String {
        let mut params = vec![format!("page={}", self.page.max(1))];

        if !self.name.trim().is_empty() {
            params.push(format!("name={}", self.name.trim()));
        }
        if !self.phone.trim().is_empty() {
            params.push(format!("phone={}", self.phone.trim()));
        }
        if !self.email.trim().is_empty() {
            params.push(format!("email={}", self.email.trim()));
        }
        if !self.postal_code.trim().is_empty() {
            params.push(format!("postalCode={}", self.postal_code.trim()));
        }

        params.join("&")
    }
}

/// Retrieve one page of customers matching the query
#[cfg(feature = "web")]
pub async fn list(token: &str, query: &CustomerQuery) -> Result<CustomerPageDto, String> {
    use reqwasm::http::Request;

    let url = format!("/api/clientes?{}", query.to_query_string());
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<CustomerPageDto>()
            .await
            .map_err(|e| format!("Failed to parse customer list: {}", e)),
        _ => Err(super::envelope_error(response).await),
    }
}

/// Retrieve one customer with resolved references
#[cfg(feature = "web")]
pub async fn get(token: &str, customer_id: i32) -> Result<CustomerEnvelopeDto, String> {
    use reqwasm::http::Request;

    let url = format!("/api/clientes/{}", customer_id);
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<CustomerEnvelopeDto>()
            .await
            .map_err(|e| format!("Failed to parse customer data: {}", e)),
        _ => Err(super::envelope_error(response).await),
    }
}

/// Register a new fraudulent customer
#[cfg(feature = "web")]
pub async fn create(
    token: &str,
    payload: &CreateCustomerDto,
) -> Result<CustomerEnvelopeDto, String> {
    use reqwasm::http::Request;

    let body =
        serde_json::to_string(payload).map_err(|e| format!("Failed to encode customer: {}", e))?;

    let response = Request::post("/api/clientes")
        .header("Authorization", &format!("Bearer {}", token))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        201 => response
            .json::<CustomerEnvelopeDto>()
            .await
            .map_err(|e| format!("Failed to parse customer data: {}", e)),
        _ => Err(super::envelope_error(response).await),
    }
}

/// Append the logged-in driver's confirmation to a customer
#[cfg(feature = "web")]
pub async fn confirm(token: &str, customer_id: i32) -> Result<CustomerEnvelopeDto, String> {
    use reqwasm::http::Request;

    let url = format!("/api/clientes/{}/confirmar", customer_id);
    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<CustomerEnvelopeDto>()
            .await
            .map_err(|e| format!("Failed to parse customer data: {}", e)),
        _ => Err(super::envelope_error(response).await),
    }
}
