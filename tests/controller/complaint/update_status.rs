//! Tests for the complaint status update endpoint.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::complaint::ComplaintStatus;
use fraudwatch::{
    model::complaint::{ComplaintEnvelopeDto, UpdateStatusDto},
    server::{controller::complaint::update_complaint_status, middleware::AuthDriver},
};
use sea_orm::EntityTrait;

use super::*;

/// Expect 200 with the stored status overwritten for an enum value
#[tokio::test]
async fn updates_to_enumerated_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    let customer = test.customers().insert(driver.id, "Carlos Pereira").await?;
    let complaint = test.complaints().insert(customer.id, driver.id).await?;

    let result = update_complaint_status(
        State(test.into_app_state()),
        AuthDriver(driver),
        Path(complaint.id),
        Json(UpdateStatusDto {
            status: "contested".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let envelope: ComplaintEnvelopeDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(envelope.complaint.status, "contested");

    let stored = entity::prelude::Complaint::find_by_id(complaint.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ComplaintStatus::Contested);

    Ok(())
}

/// Expect 400 for a status outside the enum with the stored value unchanged
#[tokio::test]
async fn bad_request_for_unknown_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    let customer = test.customers().insert(driver.id, "Carlos Pereira").await?;
    let complaint = test.complaints().insert(customer.id, driver.id).await?;

    let result = update_complaint_status(
        State(test.into_app_state()),
        AuthDriver(driver),
        Path(complaint.id),
        Json(UpdateStatusDto {
            status: "escalated".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = entity::prelude::Complaint::find_by_id(complaint.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ComplaintStatus::Pending);

    Ok(())
}

/// Expect 404 for a complaint id that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_complaint() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;

    let result = update_complaint_status(
        State(test.into_app_state()),
        AuthDriver(driver),
        Path(99),
        Json(UpdateStatusDto {
            status: "confirmed".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
