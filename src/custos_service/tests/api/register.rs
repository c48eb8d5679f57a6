use http::StatusCode;
use serde_json::json;

use crate::helpers::spawn_app;

#[tokio::test]
async fn registering_a_new_account_returns_201() {
    let app = spawn_app();

    let (status, body) = app.register("ada", "ada@example.com", "pw1-secret").await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_null(), "unexpected body: {body}");
}

#[tokio::test]
async fn registering_a_taken_username_returns_400() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;

    let (status, body) = app.register("ada", "other@example.com", "pw1-secret").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Username or email has already been registered"
    );
}

#[tokio::test]
async fn registering_a_taken_email_returns_400() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;

    let (status, body) = app.register("grace", "ada@example.com", "pw1-secret").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Username or email has already been registered"
    );
}

#[tokio::test]
async fn registering_with_invalid_fields_returns_400() {
    let app = spawn_app();

    let cases = [
        ("", "ada@example.com", "pw1-secret"),
        ("ada=1", "ada@example.com", "pw1-secret"),
        ("ada", "not-an-email", "pw1-secret"),
        ("ada", "ada@example.com", "short"),
    ];
    for (username, email, password) in cases {
        let (status, body) = app.register(username, email, password).await;
        assert_eq!(
            status,
            StatusCode::BAD_REQUEST,
            "accepted invalid input {username:?} {email:?} {password:?}"
        );
        assert!(body["error"].is_string(), "no error message: {body}");
    }
}

#[tokio::test]
async fn incomplete_json_is_a_client_error() {
    let app = spawn_app();

    let (status, _) = app
        .send("POST", "/register", None, Some(json!({ "username": "ada" })))
        .await;

    assert!(status.is_client_error(), "got {status}");
}
