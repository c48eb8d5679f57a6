use axum::{Router, body::Body};
use custos_adapters::MockEmailClient;
use custos_application::AuthConfig;
use custos_core::EmailAddress;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
    pub mailer: MockEmailClient,
}

pub fn spawn_app() -> TestApp {
    let config = AuthConfig {
        site_url: "testing.local".to_string(),
        use_https: false,
        sender: EmailAddress::try_from("no-reply@testing.local".to_string()).unwrap(),
        session_lifetime: chrono::Duration::hours(168),
    };
    let (state, mailer) = custos_service::in_memory_state(config);
    TestApp {
        router: custos_axum::router(state),
        mailer,
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/register",
            None,
            Some(json!({
                "username": username,
                "email": email,
                "password": password,
            })),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/login",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    /// Logs in and returns the bearer token, asserting success.
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let (status, body) = self.login(username, password).await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// The authenticator secret from the most recently sent email.
    pub async fn last_emailed_secret(&self) -> String {
        let sent = self.mailer.sent().await;
        let body = &sent.last().expect("no email was sent").text_body;
        authenticator_secret(body)
    }
}

pub fn authenticator_secret(text_body: &str) -> String {
    let start = text_body
        .find("?a=")
        .expect("no authenticator link in email body")
        + 3;
    text_body[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
