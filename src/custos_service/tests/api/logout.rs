use http::StatusCode;

use crate::helpers::spawn_app;

#[tokio::test]
async fn logging_out_returns_204_and_kills_the_session() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;
    let token = app.login_token("ada", "pw1-secret").await;

    let (status, _) = app.send("PUT", "/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (replay_status, replay_body) = app.send("PUT", "/logout", Some(&token), None).await;
    assert_eq!(replay_status, StatusCode::BAD_REQUEST);
    assert!(replay_body["error"].is_string(), "no error message: {replay_body}");
}

#[tokio::test]
async fn logging_out_issues_a_fresh_token_on_the_next_login() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;
    let token = app.login_token("ada", "pw1-secret").await;

    app.send("PUT", "/logout", Some(&token), None).await;
    let next = app.login_token("ada", "pw1-secret").await;

    assert_ne!(token, next);
}

#[tokio::test]
async fn logging_out_without_a_token_returns_400() {
    let app = spawn_app();

    let (status, body) = app.send("PUT", "/logout", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "no error message: {body}");
}

#[tokio::test]
async fn logging_out_with_a_garbage_token_returns_400() {
    let app = spawn_app();

    let (status, _) = app.send("PUT", "/logout", Some("not-a-token"), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
