use http::StatusCode;
use serde_json::json;

use crate::helpers::spawn_app;

#[tokio::test]
async fn requesting_verification_sends_a_link_to_the_account_email() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;
    let token = app.login_token("ada", "pw1-secret").await;

    let (status, _) = app.send("POST", "/email/verify", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let sent = app.mailer.sent().await;
    assert_eq!(sent.len(), 1);
    let email = &sent[0];
    assert_eq!(email.to.as_str(), "ada@example.com");
    assert!(email.text_body.contains("http://testing.local/verify?a="));
}

#[tokio::test]
async fn requesting_verification_without_a_session_returns_400() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;

    let (status, _) = app.send("POST", "/email/verify", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send("POST", "/email/verify", Some("bogus-token"), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(app.mailer.sent().await.is_empty());
}

#[tokio::test]
async fn completing_verification_is_single_use() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;
    let token = app.login_token("ada", "pw1-secret").await;
    app.send("POST", "/email/verify", Some(&token), None).await;
    let secret = app.last_emailed_secret().await;

    let (status, _) = app
        .send("PUT", &format!("/verify?a={secret}"), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (replay_status, replay_body) = app
        .send("PUT", &format!("/verify?a={secret}"), None, None)
        .await;
    assert_eq!(replay_status, StatusCode::BAD_REQUEST);
    assert!(replay_body["error"].is_string(), "no error message: {replay_body}");
}

#[tokio::test]
async fn completing_verification_with_an_unknown_secret_returns_400() {
    let app = spawn_app();

    let (status, _) = app.send("PUT", "/verify?a=never-issued", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn requesting_a_reset_needs_no_session() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;

    let (status, _) = app
        .send(
            "POST",
            "/email/reset",
            None,
            Some(json!({ "email": "ada@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let sent = app.mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text_body.contains("http://testing.local/reset?a="));
}

#[tokio::test]
async fn requesting_a_reset_for_an_unknown_email_returns_400() {
    let app = spawn_app();

    let (status, body) = app
        .send(
            "POST",
            "/email/reset",
            None,
            Some(json!({ "email": "nobody@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "no error message: {body}");
}

#[tokio::test]
async fn completing_a_reset_rotates_the_password_and_revokes_sessions() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;
    let old_token = app.login_token("ada", "pw1-secret").await;

    app.send(
        "POST",
        "/email/reset",
        None,
        Some(json!({ "email": "ada@example.com" })),
    )
    .await;
    let secret = app.last_emailed_secret().await;

    let (status, _) = app
        .send(
            "PUT",
            &format!("/reset?a={secret}"),
            None,
            Some(json!({ "new_password": "pw2-rotated" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Every pre-reset session is gone.
    let (logout_status, _) = app.send("PUT", "/logout", Some(&old_token), None).await;
    assert_eq!(logout_status, StatusCode::BAD_REQUEST);

    // The old password no longer works, the new one does.
    let (old_pw_status, _) = app.login("ada", "pw1-secret").await;
    assert_eq!(old_pw_status, StatusCode::BAD_REQUEST);
    let new_token = app.login_token("ada", "pw2-rotated").await;
    assert_ne!(old_token, new_token);
}

#[tokio::test]
async fn a_reset_secret_cannot_complete_twice() {
    let app = spawn_app();
    app.register("ada", "ada@example.com", "pw1-secret").await;
    app.send(
        "POST",
        "/email/reset",
        None,
        Some(json!({ "email": "ada@example.com" })),
    )
    .await;
    let secret = app.last_emailed_secret().await;

    app.send(
        "PUT",
        &format!("/reset?a={secret}"),
        None,
        Some(json!({ "new_password": "pw2-rotated" })),
    )
    .await;
    let (status, _) = app
        .send(
            "PUT",
            &format!("/reset?a={secret}"),
            None,
            Some(json!({ "new_password": "pw3-again" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (login_status, _) = app.login("ada", "pw3-again").await;
    assert_eq!(login_status, StatusCode::BAD_REQUEST);
}
