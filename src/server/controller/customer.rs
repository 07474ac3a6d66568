use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CustomerEnvelopeDto, CustomerPageDto},
    },
    server::{
        data::customer::CustomerFilter,
        error::Error,
        middleware::AuthDriver,
        model::app::AppState,
        service::customer::CustomerService,
    },
};

pub static CUSTOMER_TAG: &str = "customer";

#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerListParams {
    /// Case-insensitive name substring
    pub name: Option<String>,
    /// Exact phone number
    pub phone: Option<String>,
    /// Case-insensitive email substring
    pub email: Option<String>,
    /// Exact postal code
    pub postal_code: Option<String>,
    /// Page index, 1-based (default 1)
    pub page: Option<u64>,
    /// Rows per page (default 10)
    pub page_size: Option<u64>,
}

/// Register a new fraudulent customer
///
/// The confirmation list starts with the creating driver's own entry.
///
/// # Responses
/// - 201 (Created): Customer registered
/// - 400 (Bad Request): Missing name or fraud description
/// - 401 (Unauthorized): Missing or invalid bearer token
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Customer registered", body = CustomerEnvelopeDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    AuthDriver(driver): AuthDriver,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, Error> {
    let customer = CustomerService::new(&state.db)
        .create(&driver, &payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CustomerEnvelopeDto {
            success: true,
            message: Some("Customer registered successfully".to_string()),
            customer,
        }),
    ))
}

/// List fraudulent customers
///
/// Optional filters narrow the result; rows are newest first.
///
/// # Responses
/// - 200 (OK): One page of customers plus pagination totals
/// - 401 (Unauthorized): Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = CUSTOMER_TAG,
    params(CustomerListParams),
    responses(
        (status = 200, description = "Page of matching customers", body = CustomerPageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_customers(
    State(state): State<AppState>,
    AuthDriver(_driver): AuthDriver,
    Query(params): Query<CustomerListParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = CustomerFilter {
        name: params.name,
        phone: params.phone,
        email: params.email,
        postal_code: params.postal_code,
    };

    let page = CustomerService::new(&state.db)
        .list(filter, params.page, params.page_size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get one customer with creator and confirmers resolved
///
/// # Responses
/// - 200 (OK): Customer detail
/// - 401 (Unauthorized): Missing or invalid bearer token
/// - 404 (Not Found): No customer with that id
#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer detail", body = CustomerEnvelopeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    AuthDriver(_driver): AuthDriver,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let customer = CustomerService::new(&state.db).get(customer_id).await?;

    Ok((
        StatusCode::OK,
        Json(CustomerEnvelopeDto {
            success: true,
            message: None,
            customer,
        }),
    ))
}

/// Confirm a fraudulent customer
///
/// Appends the logged-in driver's confirmation; a driver can confirm a given
/// customer only once.
///
/// # Responses
/// - 200 (OK): Confirmation appended
/// - 400 (Bad Request): Driver already confirmed this customer
/// - 401 (Unauthorized): Missing or invalid bearer token
/// - 404 (Not Found): No customer with that id
#[utoipa::path(
    post,
    path = "/api/clientes/{id}/confirmar",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Confirmation appended", body = CustomerEnvelopeDto),
        (status = 400, description = "Already confirmed by this driver", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_customer(
    State(state): State<AppState>,
    AuthDriver(driver): AuthDriver,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let customer = CustomerService::new(&state.db)
        .confirm(customer_id, &driver)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CustomerEnvelopeDto {
            success: true,
            message: Some("Customer confirmed successfully".to_string()),
            customer,
        }),
    ))
}
