//! Tests for the complaint list endpoint.

use axum::{
    body::to_bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use entity::complaint::ComplaintStatus;
use fraudwatch::{
    model::complaint::ComplaintPageDto,
    server::{
        controller::complaint::{list_complaints, ComplaintListParams},
        middleware::AuthDriver,
    },
};

use super::*;

fn params() -> ComplaintListParams {
    ComplaintListParams {
        customer: None,
        status: None,
        start_date: None,
        end_date: None,
        page: None,
        page_size: None,
    }
}

async fn page_from(resp: axum::response::Response) -> ComplaintPageDto {
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Expect the status filter to narrow results
#[tokio::test]
async fn filters_by_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    let customer = test.customers().insert(driver.id, "Carlos Pereira").await?;
    test.complaints().insert(customer.id, driver.id).await?;
    test.complaints()
        .insert_with_status(customer.id, driver.id, ComplaintStatus::Resolved)
        .await?;

    let mut list_params = params();
    list_params.status = Some("resolved".to_string());
    let result = list_complaints(
        State(test.into_app_state()),
        AuthDriver(driver),
        Query(list_params),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let page = page_from(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.complaints[0].status, "resolved");

    Ok(())
}

/// Expect 400 for a status filter outside the enum
#[tokio::test]
async fn bad_request_for_unknown_status_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;

    let mut list_params = params();
    list_params.status = Some("escalated".to_string());
    let result = list_complaints(
        State(test.into_app_state()),
        AuthDriver(driver),
        Query(list_params),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect inclusive delivery-date bounds and resolved display fields
#[tokio::test]
async fn date_range_is_inclusive_with_resolved_references() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    let customer = test.customers().insert(driver.id, "Carlos Pereira").await?;
    let complaint = test.complaints().insert(customer.id, driver.id).await?;

    let mut list_params = params();
    list_params.start_date = Some(complaint.delivery_date);
    list_params.end_date = Some(complaint.delivery_date);
    let result = list_complaints(
        State(test.into_app_state()),
        AuthDriver(driver.clone()),
        Query(list_params),
    )
    .await;

    let page = page_from(result.unwrap().into_response()).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.complaints[0].customer.name, "Carlos Pereira");
    assert_eq!(page.complaints[0].driver.id, driver.id);

    let mut list_params = params();
    list_params.start_date = Some(NaiveDate::from_ymd_opt(2026, 7, 15).unwrap());
    let result = list_complaints(
        State(test.into_app_state()),
        AuthDriver(driver),
        Query(list_params),
    )
    .await;

    let page = page_from(result.unwrap().into_response()).await;
    assert_eq!(page.total, 0);

    Ok(())
}
