use passgate_adapters::http::routes::VerifiedTokenResponse;
use passgate_core::{AuthResponse, TokenService, UserId};
use serde_json::json;

use crate::helpers::{TestApp, credentials, error_message};

async fn registered(app: &TestApp) -> AuthResponse {
    app.post_register(&credentials("a@x.com", "secret1"))
        .await
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn verify_token_returns_the_user_id() {
    let app = TestApp::new().await;
    let auth = registered(&app).await;

    let response = app
        .post_verify_token(&json!({ "token": auth.token.as_str() }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: VerifiedTokenResponse = response.json().await.unwrap();
    assert_eq!(body.user_id, auth.user.id);
}

#[tokio::test]
async fn verify_token_rejects_garbage() {
    let app = TestApp::new().await;

    let response = app
        .post_verify_token(&json!({ "token": "invalid_token" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid token");
}

#[tokio::test]
async fn verify_token_rejects_expired_token() {
    let app = TestApp::new().await;
    let expired = app
        .token_service_with_ttl(-60)
        .issue(&UserId::new())
        .unwrap();

    let response = app
        .post_verify_token(&json!({ "token": expired.as_str() }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Token expired");
}

#[tokio::test]
async fn verify_token_requires_a_token_field() {
    let app = TestApp::new().await;

    let response = app.post_verify_token(&json!({})).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn me_accepts_bearer_token() {
    let app = TestApp::new().await;
    let auth = registered(&app).await;

    let response = app.get_me(Some(auth.token.as_str())).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: VerifiedTokenResponse = response.json().await.unwrap();
    assert_eq!(body.user_id, auth.user.id);
}

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.get_me(None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Missing token");
}

#[tokio::test]
async fn me_rejects_token_from_another_server() {
    let app = TestApp::new().await;
    let other = TestApp::new().await;
    let foreign = other.token_service().issue(&UserId::new()).unwrap();

    let response = app.get_me(Some(foreign.as_str())).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid token");
}
