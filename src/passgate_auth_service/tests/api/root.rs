use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn root_returns_hello_world() {
    let app = TestApp::new().await;

    let response = app.get_root().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "hello world");
}
