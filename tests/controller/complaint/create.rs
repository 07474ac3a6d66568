//! Tests for the complaint creation endpoint.

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use fraudwatch::{
    model::complaint::{ComplaintEnvelopeDto, CreateComplaintDto, EvidenceDto},
    server::{controller::complaint::create_complaint, middleware::AuthDriver},
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

fn complaint_for(customer_id: i32) -> CreateComplaintDto {
    CreateComplaintDto {
        customer: customer_id,
        delivery_date: NaiveDate::from_ymd_opt(2026, 7, 14).unwrap(),
        tracking_code: Some("BR123456789".to_string()),
        description: "Signed for the package, later claimed non-delivery".to_string(),
        evidence: vec![EvidenceDto {
            kind: "photo".to_string(),
            url: "https://cdn.example.com/doorstep.jpg".to_string(),
            description: Some("Package at the door".to_string()),
        }],
    }
}

/// Expect 201 with pending status and the evidence attached
#[tokio::test]
async fn created_as_pending_with_evidence() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    let customer = test.customers().insert(driver.id, "Carlos Pereira").await?;

    let result = create_complaint(
        State(test.into_app_state()),
        AuthDriver(driver.clone()),
        Json(complaint_for(customer.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let envelope: ComplaintEnvelopeDto = serde_json::from_slice(&body).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.complaint.status, "pending");
    assert_eq!(envelope.complaint.evidence.len(), 1);
    assert_eq!(envelope.complaint.driver.id, driver.id);

    Ok(())
}

/// Expect 404 for a nonexistent customer with no complaint persisted
#[tokio::test]
async fn not_found_for_nonexistent_customer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;

    let result = create_complaint(
        State(test.into_app_state()),
        AuthDriver(driver),
        Json(complaint_for(99)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let stored = entity::prelude::Complaint::find().count(&test.db).await?;
    assert_eq!(stored, 0);

    Ok(())
}

/// Expect 400 when the description is missing
#[tokio::test]
async fn bad_request_for_missing_description() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    let customer = test.customers().insert(driver.id, "Carlos Pereira").await?;

    let mut payload = complaint_for(customer.id);
    payload.description = "  ".to_string();
    let result = create_complaint(
        State(test.into_app_state()),
        AuthDriver(driver),
        Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
