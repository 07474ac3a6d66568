//! Tests for the driver profile endpoint.

use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use fraudwatch::{
    model::driver::ProfileDto,
    server::{controller::driver::profile, middleware::AuthDriver},
};

use super::*;

/// Expect 200 with the authenticated driver's own profile
#[tokio::test]
async fn returns_own_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registry_tables().build().await?;
    let driver = test.drivers().insert("ana@example.com").await?;

    let result = profile(AuthDriver(driver.clone())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let envelope: ProfileDto = serde_json::from_slice(&body).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.driver.id, driver.id);
    assert_eq!(envelope.driver.email, "ana@example.com");

    Ok(())
}
