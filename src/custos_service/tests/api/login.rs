use http::StatusCode;

use crate::helpers::spawn_app;

#[tokio::test]
async fn logging_in_returns_a_token() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;

    let (status, body) = app.login("ada", "pw1-secret").await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    assert!(token.contains("username=ada"), "unexpected token: {token}");
}

#[tokio::test]
async fn logging_in_again_reuses_the_live_session() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;

    let first = app.login_token("ada", "pw1-secret").await;
    let second = app.login_token("ada", "pw1-secret").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_indistinguishable() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;

    let (wrong_pw_status, wrong_pw_body) = app.login("ada", "pw1-wrong!").await;
    let (unknown_status, unknown_body) = app.login("nobody", "pw1-secret").await;

    assert_eq!(wrong_pw_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_pw_body, unknown_body);
    assert_eq!(wrong_pw_body["error"], "Username or password is incorrect");
}
