//! Tests for the bearer-token auth extractor.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, Request, StatusCode},
    response::IntoResponse,
};
use fraudwatch::server::{middleware::AuthDriver, model::auth::JwtKeys};
use fraudwatch_test_utils::prelude::*;

use crate::TestSetupExt;

fn parts_with_authorization(value: Option<String>) -> Parts {
    let mut builder = Request::builder().uri("/api/drivers/perfil");
    if let Some(value) = value {
        builder = builder.header("Authorization", value);
    }

    let (parts, ()) = builder.body(()).unwrap().into_parts();
    parts
}

/// Expect the driver model to be attached for a valid bearer token
#[tokio::test]
async fn attaches_driver_for_valid_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    let token = JwtKeys::from_secret(&test.jwt_secret)
        .issue(driver.id)
        .unwrap();

    let mut parts = parts_with_authorization(Some(format!("Bearer {}", token)));
    let result = AuthDriver::from_request_parts(&mut parts, &test.into_app_state()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0.id, driver.id);

    Ok(())
}

/// Expect 401 when the Authorization header is absent
#[tokio::test]
async fn unauthorized_without_header() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;

    let mut parts = parts_with_authorization(None);
    let result = AuthDriver::from_request_parts(&mut parts, &test.into_app_state()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 when the header does not carry a bearer scheme
#[tokio::test]
async fn unauthorized_for_non_bearer_scheme() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;

    let mut parts = parts_with_authorization(Some("Basic dXNlcjpwYXNz".to_string()));
    let result = AuthDriver::from_request_parts(&mut parts, &test.into_app_state()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for a token that fails verification
#[tokio::test]
async fn unauthorized_for_garbage_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;

    let mut parts = parts_with_authorization(Some("Bearer not-a-token".to_string()));
    let result = AuthDriver::from_request_parts(&mut parts, &test.into_app_state()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for a token signed with a different secret
#[tokio::test]
async fn unauthorized_for_foreign_signature() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;
    let token = JwtKeys::from_secret("other-secret").issue(driver.id).unwrap();

    let mut parts = parts_with_authorization(Some(format!("Bearer {}", token)));
    let result = AuthDriver::from_request_parts(&mut parts, &test.into_app_state()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 for a valid token whose driver no longer exists
#[tokio::test]
async fn not_found_for_missing_driver() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let token = JwtKeys::from_secret(&test.jwt_secret).issue(99).unwrap();

    let mut parts = parts_with_authorization(Some(format!("Bearer {}", token)));
    let result = AuthDriver::from_request_parts(&mut parts, &test.into_app_state()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
