//! Tests for the complaint detail endpoint.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use fraudwatch::{
    model::complaint::ComplaintEnvelopeDto,
    server::{controller::complaint::get_complaint, middleware::AuthDriver},
};

use super::*;

/// Expect 200 with customer, filer, and evidence resolved
#[tokio::test]
async fn resolves_references_and_evidence() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    let customer = test.customers().insert(driver.id, "Carlos Pereira").await?;
    let complaint = test.complaints().insert(customer.id, driver.id).await?;
    test.complaints().insert_evidence(complaint.id).await?;

    let result = get_complaint(
        State(test.into_app_state()),
        AuthDriver(driver.clone()),
        Path(complaint.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let envelope: ComplaintEnvelopeDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(envelope.complaint.customer.name, "Carlos Pereira");
    assert_eq!(envelope.complaint.driver.id, driver.id);
    assert_eq!(envelope.complaint.evidence.len(), 1);

    Ok(())
}

/// Expect 404 for a complaint id that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_complaint() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;

    let result = get_complaint(State(test.into_app_state()), AuthDriver(driver), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
