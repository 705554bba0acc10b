use passgate_core::{AuthResponse, TokenService};

use crate::helpers::{TestApp, credentials, error_message, get_random_email};

#[tokio::test]
async fn should_return_200_with_fresh_token_after_register() {
    let app = TestApp::new().await;

    let registered: AuthResponse = app
        .post_register(&credentials("a@x.com", "secret1"))
        .await
        .json()
        .await
        .unwrap();

    let response = app.post_login(&credentials("a@x.com", "secret1")).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: AuthResponse = response.json().await.unwrap();
    assert_eq!(body.user, registered.user);
    assert_eq!(
        app.token_service().verify(body.token.as_str()).unwrap(),
        registered.user.id
    );
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let app = TestApp::new().await;
    app.post_register(&credentials("a@x.com", "secret1")).await;

    let wrong_password = app.post_login(&credentials("a@x.com", "wrong")).await;
    let unknown_email = app
        .post_login(&credentials(&get_random_email(), "secret1"))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);

    let wrong_password = wrong_password.text().await.unwrap();
    let unknown_email = unknown_email.text().await.unwrap();
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password, r#"{"error":"Invalid credentials"}"#);
}

#[tokio::test]
async fn email_match_is_case_sensitive() {
    let app = TestApp::new().await;
    app.post_register(&credentials("a@x.com", "secret1")).await;

    let response = app.post_login(&credentials("A@x.com", "secret1")).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid credentials");
}

#[tokio::test]
async fn should_return_400_if_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        credentials("not-an-email", "secret1"),
        credentials(&get_random_email(), ""),
        serde_json::json!({ "email": get_random_email() }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_login(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }
}
