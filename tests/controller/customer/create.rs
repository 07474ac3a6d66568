//! Tests for the customer creation endpoint.

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use fraudwatch::{
    model::customer::{CreateCustomerDto, CustomerEnvelopeDto},
    server::{controller::customer::create_customer, middleware::AuthDriver},
};

use super::*;

fn payload() -> CreateCustomerDto {
    CreateCustomerDto {
        name: "Carlos Pereira".to_string(),
        fraud_description: "Claims packages never arrive".to_string(),
        ..Default::default()
    }
}

/// Expect 201 with the creator's confirmation already seeded
#[tokio::test]
async fn created_with_seeded_confirmation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;

    let result = create_customer(
        State(test.into_app_state()),
        AuthDriver(driver.clone()),
        Json(payload()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let envelope: CustomerEnvelopeDto = serde_json::from_slice(&body).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.customer.confirmations.len(), 1);
    assert_eq!(envelope.customer.confirmations[0].driver.id, driver.id);
    assert_eq!(envelope.customer.created_by.id, driver.id);

    Ok(())
}

/// Expect 400 when the fraud description is missing
#[tokio::test]
async fn bad_request_for_missing_fraud_description() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;

    let mut payload = payload();
    payload.fraud_description = String::new();
    let result = create_customer(
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
