//! Tests for the customer list endpoint.

use axum::{
    body::to_bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use fraudwatch::{
    model::customer::CustomerPageDto,
    server::{
        controller::customer::{list_customers, CustomerListParams},
        middleware::AuthDriver,
    },
};

use super::*;

fn params() -> CustomerListParams {
    CustomerListParams {
        name: None,
        phone: None,
        email: None,
        postal_code: None,
        page: None,
        page_size: None,
    }
}

async fn page_from(resp: axum::response::Response) -> CustomerPageDto {
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Expect pagination totals with totalPages = ceil(total / pageSize)
#[tokio::test]
async fn computes_pagination_totals() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    for n in 0..5 {
        test.customers()
            .insert(driver.id, &format!("Customer {}", n))
            .await?;
    }

    let mut list_params = params();
    list_params.page_size = Some(2);
    let result = list_customers(
        State(test.into_app_state()),
        AuthDriver(driver),
        Query(list_params),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let page = page_from(resp).await;
    assert!(page.success);
    assert_eq!(page.total, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.customers.len(), 2);

    Ok(())
}

/// Expect the name filter to match substrings case-insensitively
#[tokio::test]
async fn name_filter_is_case_insensitive_substring() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    test.customers().insert(driver.id, "Carlos Pereira").await?;
    test.customers().insert(driver.id, "Maria Carlota").await?;
    test.customers().insert(driver.id, "Joao Lima").await?;

    let mut list_params = params();
    list_params.name = Some("CARL".to_string());
    let result = list_customers(
        State(test.into_app_state()),
        AuthDriver(driver),
        Query(list_params),
    )
    .await;

    let page = page_from(result.unwrap().into_response()).await;
    assert_eq!(page.total, 2);
    assert!(page
        .customers
        .iter()
        .all(|customer| customer.name.to_lowercase().contains("carl")));

    Ok(())
}

/// Expect an empty page when no record matches
#[tokio::test]
async fn empty_page_when_nothing_matches() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    test.customers().insert(driver.id, "Carlos Pereira").await?;

    let mut list_params = params();
    list_params.postal_code = Some("99999-999".to_string());
    let result = list_customers(
        State(test.into_app_state()),
        AuthDriver(driver),
        Query(list_params),
    )
    .await;

    let page = page_from(result.unwrap().into_response()).await;
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.customers.is_empty());

    Ok(())
}
