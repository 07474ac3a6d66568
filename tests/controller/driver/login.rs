//! Tests for the driver login endpoint.

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use fraudwatch::{
    model::driver::{AuthDto, LoginDto, RegisterDriverDto},
    server::{
        controller::driver::{login, register},
        model::app::AppState,
    },
};

use super::*;

async fn register_ana(state: AppState) {
    let payload = RegisterDriverDto {
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        password: "hunter22".to_string(),
        company: "Rapid Delivery".to_string(),
        phone: None,
    };
    register(State(state), Json(payload)).await.unwrap();
}

/// Expect 200 with a token for correct credentials
#[tokio::test]
async fn accepts_correct_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let state = test.into_app_state();
    register_ana(state.clone()).await;

    let result = login(
        State(state),
        Json(LoginDto {
            email: "ana@example.com".to_string(),
            password: "hunter22".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let auth: AuthDto = serde_json::from_slice(&body).unwrap();
    assert!(auth.success);
    assert!(!auth.token.is_empty());

    Ok(())
}

/// Expect wrong password and unknown email to produce byte-identical 401
/// envelopes
#[tokio::test]
async fn bad_credentials_are_indistinguishable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let state = test.into_app_state();
    register_ana(state.clone()).await;

    let wrong_password = login(
        State(state.clone()),
        Json(LoginDto {
            email: "ana@example.com".to_string(),
            password: "wrong".to_string(),
        }),
    )
    .await;
    let unknown_email = login(
        State(state),
        Json(LoginDto {
            email: "nobody@example.com".to_string(),
            password: "hunter22".to_string(),
        }),
    )
    .await;

    let wrong_resp = wrong_password.err().unwrap().into_response();
    let unknown_resp = unknown_email.err().unwrap().into_response();
    assert_eq!(wrong_resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_resp.status(), StatusCode::UNAUTHORIZED);

    let wrong_body = to_bytes(wrong_resp.into_body(), usize::MAX).await.unwrap();
    let unknown_body = to_bytes(unknown_resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(wrong_body, unknown_body);

    Ok(())
}
