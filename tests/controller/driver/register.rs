//! Tests for the driver registration endpoint.

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use fraudwatch::{
    model::driver::{AuthDto, RegisterDriverDto},
    server::controller::driver::register,
};
use sea_orm::EntityTrait;

use super::*;

fn registration(email: &str) -> RegisterDriverDto {
    RegisterDriverDto {
        name: "Ana Souza".to_string(),
        email: email.to_string(),
        password: "hunter22".to_string(),
        company: "Rapid Delivery".to_string(),
        phone: None,
    }
}

/// Expect 201 with a token and the driver's identity for a valid registration
#[tokio::test]
async fn created_for_valid_registration() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        Json(registration("ana@example.com")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let auth: AuthDto = serde_json::from_slice(&body).unwrap();
    assert!(auth.success);
    assert!(!auth.token.is_empty());
    assert_eq!(auth.driver.email, "ana@example.com");

    Ok(())
}

/// Expect 400 for a second registration with the same email, with the first
/// driver's record unaffected
#[tokio::test]
async fn conflict_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let state = test.into_app_state();

    let first = register(State(state.clone()), Json(registration("ana@example.com"))).await;
    assert!(first.is_ok());

    let mut second = registration("ana@example.com");
    second.name = "Impostor".to_string();
    let result = register(State(state), Json(second)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let drivers = entity::prelude::Driver::find().all(&test.db).await?;
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].name, "Ana Souza");

    Ok(())
}

/// Expect 400 when a required field is missing
#[tokio::test]
async fn bad_request_for_missing_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;

    let mut payload = registration("ana@example.com");
    payload.company = String::new();
    let result = register(State(test.into_app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
