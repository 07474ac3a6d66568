//! Tests for the customer confirmation endpoint.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fraudwatch::{
    model::customer::{CreateCustomerDto, CustomerEnvelopeDto},
    server::{
        controller::customer::{confirm_customer, create_customer, get_customer},
        middleware::AuthDriver,
        model::app::AppState,
    },
};

use super::*;

async fn create_via_endpoint(state: AppState, driver: entity::driver::Model) -> i32 {
    let payload = CreateCustomerDto {
        name: "Carlos Pereira".to_string(),
        fraud_description: "Claims packages never arrive".to_string(),
        ..Default::default()
    };
    let resp = create_customer(State(state), AuthDriver(driver), Json(payload))
        .await
        .unwrap()
        .into_response();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let envelope: CustomerEnvelopeDto = serde_json::from_slice(&body).unwrap();
    envelope.customer.id
}

/// Expect a second distinct driver's confirmation to append an entry
#[tokio::test]
async fn appends_confirmation_for_second_driver() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let ana = test.drivers().insert("ana@example.com").await?;
    let bruno = test.drivers().insert("bruno@example.com").await?;
    let state = test.into_app_state();
    let customer_id = create_via_endpoint(state.clone(), ana).await;

    let result = confirm_customer(State(state), AuthDriver(bruno), Path(customer_id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let envelope: CustomerEnvelopeDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(envelope.customer.confirmations.len(), 2);

    Ok(())
}

/// Expect the creator's repeat confirmation to be rejected with the list
/// length unchanged
#[tokio::test]
async fn bad_request_for_repeat_confirmation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let ana = test.drivers().insert("ana@example.com").await?;
    let state = test.into_app_state();
    let customer_id = create_via_endpoint(state.clone(), ana.clone()).await;

    let result = confirm_customer(
        State(state.clone()),
        AuthDriver(ana.clone()),
        Path(customer_id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let detail = get_customer(State(state), AuthDriver(ana), Path(customer_id))
        .await
        .unwrap()
        .into_response();
    let body = to_bytes(detail.into_body(), usize::MAX).await.unwrap();
    let envelope: CustomerEnvelopeDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(envelope.customer.confirmations.len(), 1);

    Ok(())
}

/// Expect 404 when confirming a customer that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_customer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let ana = test.drivers().insert("ana@example.com").await?;

    let result = confirm_customer(State(test.into_app_state()), AuthDriver(ana), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
