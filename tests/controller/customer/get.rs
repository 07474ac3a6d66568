//! Tests for the customer detail endpoint.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use fraudwatch::{
    model::customer::CustomerEnvelopeDto,
    server::{controller::customer::get_customer, middleware::AuthDriver},
};

use super::*;

/// Expect 200 with creator and confirmers resolved to display fields
#[tokio::test]
async fn resolves_references() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let ana = test.drivers().insert_named("Ana Souza", "ana@example.com").await?;
    let bruno = test
        .drivers()
        .insert_named("Bruno Costa", "bruno@example.com")
        .await?;
    let customer = test.customers().insert(ana.id, "Carlos Pereira").await?;
    test.customers()
        .insert_confirmation(customer.id, ana.id)
        .await?;
    test.customers()
        .insert_confirmation(customer.id, bruno.id)
        .await?;

    let result = get_customer(
        State(test.into_app_state()),
        AuthDriver(ana.clone()),
        Path(customer.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let envelope: CustomerEnvelopeDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(envelope.customer.created_by.name, "Ana Souza");
    assert_eq!(envelope.customer.confirmations.len(), 2);
    let confirmers: Vec<&str> = envelope
        .customer
        .confirmations
        .iter()
        .map(|confirmation| confirmation.driver.name.as_str())
        .collect();
    assert!(confirmers.contains(&"Ana Souza"));
    assert!(confirmers.contains(&"Bruno Costa"));

    Ok(())
}

/// Expect 404 for a customer id that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_customer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;

    let result = get_customer(State(test.into_app_state()), AuthDriver(driver), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
