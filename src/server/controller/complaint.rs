use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use entity::complaint::ComplaintStatus;
use sea_orm::ActiveEnum;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        complaint::{
            ComplaintEnvelopeDto, ComplaintPageDto, CreateComplaintDto, UpdateStatusDto,
        },
    },
    server::{
        data::complaint::ComplaintFilter,
        error::Error,
        middleware::AuthDriver,
        model::app::AppState,
        service::complaint::ComplaintService,
    },
};

pub static COMPLAINT_TAG: &str = "complaint";

#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ComplaintListParams {
    /// Customer id the complaint targets
    pub customer: Option<i32>,
    /// One of pending, confirmed, contested, resolved
    pub status: Option<String>,
    /// Inclusive lower bound on delivery date (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on delivery date (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
    /// Page index, 1-based (default 1)
    pub page: Option<u64>,
    /// Rows per page (default 10)
    pub page_size: Option<u64>,
}

/// File a complaint against a registered customer
///
/// # Responses
/// - 201 (Created): Complaint filed with any supplied evidence attached
/// - 400 (Bad Request): Missing description
/// - 401 (Unauthorized): Missing or invalid bearer token
/// - 404 (Not Found): Referenced customer does not exist
#[utoipa::path(
    post,
    path = "/api/reclamacoes",
    tag = COMPLAINT_TAG,
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Complaint filed", body = ComplaintEnvelopeDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_complaint(
    State(state): State<AppState>,
    AuthDriver(driver): AuthDriver,
    Json(payload): Json<CreateComplaintDto>,
) -> Result<impl IntoResponse, Error> {
    let complaint = ComplaintService::new(&state.db)
        .create(&driver, &payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ComplaintEnvelopeDto {
            success: true,
            message: Some("Complaint registered successfully".to_string()),
            complaint,
        }),
    ))
}

/// List complaints
///
/// Filters by customer, status, and an inclusive delivery-date range; rows
/// are newest first.
///
/// # Responses
/// - 200 (OK): One page of complaints plus pagination totals
/// - 400 (Bad Request): Status filter outside the enum
/// - 401 (Unauthorized): Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/api/reclamacoes",
    tag = COMPLAINT_TAG,
    params(ComplaintListParams),
    responses(
        (status = 200, description = "Page of matching complaints", body = ComplaintPageDto),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_complaints(
    State(state): State<AppState>,
    AuthDriver(_driver): AuthDriver,
    Query(params): Query<ComplaintListParams>,
) -> Result<impl IntoResponse, Error> {
    let status = params
        .status
        .map(|status| {
            ComplaintStatus::try_from_value(&status)
                .map_err(|_| Error::Validation("Invalid status".to_string()))
        })
        .transpose()?;

    let filter = ComplaintFilter {
        customer_id: params.customer,
        status,
        start_date: params.start_date,
        end_date: params.end_date,
    };

    let page = ComplaintService::new(&state.db)
        .list(filter, params.page, params.page_size)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get one complaint with customer, filer, and evidence resolved
///
/// # Responses
/// - 200 (OK): Complaint detail
/// - 401 (Unauthorized): Missing or invalid bearer token
/// - 404 (Not Found): No complaint with that id
#[utoipa::path(
    get,
    path = "/api/reclamacoes/{id}",
    tag = COMPLAINT_TAG,
    params(("id" = i32, Path, description = "Complaint id")),
    responses(
        (status = 200, description = "Complaint detail", body = ComplaintEnvelopeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_complaint(
    State(state): State<AppState>,
    AuthDriver(_driver): AuthDriver,
    Path(complaint_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let complaint = ComplaintService::new(&state.db).get(complaint_id).await?;

    Ok((
        StatusCode::OK,
        Json(ComplaintEnvelopeDto {
            success: true,
            message: None,
            complaint,
        }),
    ))
}

/// Update a complaint's status
///
/// The submitted status must be one of pending, confirmed, contested,
/// resolved.
///
/// # Responses
/// - 200 (OK): Status overwritten
/// - 400 (Bad Request): Status outside the enum; stored value unchanged
/// - 401 (Unauthorized): Missing or invalid bearer token
/// - 404 (Not Found): No complaint with that id
#[utoipa::path(
    put,
    path = "/api/reclamacoes/{id}/status",
    tag = COMPLAINT_TAG,
    params(("id" = i32, Path, description = "Complaint id")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ComplaintEnvelopeDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_complaint_status(
    State(state): State<AppState>,
    AuthDriver(_driver): AuthDriver,
    Path(complaint_id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let complaint = ComplaintService::new(&state.db)
        .update_status(complaint_id, &payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ComplaintEnvelopeDto {
            success: true,
            message: Some(format!("Status updated to {}", payload.status)),
            complaint,
        }),
    ))
}
