use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Auth routes (no authentication required)
pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::TestContext;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server(ctx: &TestContext) -> TestServer {
        TestServer::new(routes(ctx.auth_service.clone())).unwrap()
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let register = server
            .post("/api/auth/register")
            .json(&json!({
                "username": "river_saver",
                "email": "river@example.com",
                "password": "hunter22"
            }))
            .await;
        register.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = register.json();
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert_eq!(body["user"]["username"], "river_saver");
        assert_eq!(body["user"]["email"], "river@example.com");

        let login = server
            .post("/api/auth/login")
            .json(&json!({ "email": "river@example.com", "password": "hunter22" }))
            .await;
        login.assert_status_ok();
        let body: serde_json::Value = login.json();
        assert_eq!(body["user"]["username"], "river_saver");
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_401() {
        let ctx = TestContext::new();
        let server = server(&ctx);
        server
            .post("/api/auth/register")
            .json(&json!({
                "username": "river_saver",
                "email": "river@example.com",
                "password": "hunter22"
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "river@example.com", "password": "wrong-one" }))
            .await;

        response.assert_status_unauthorized();
        response.assert_json(&json!({ "message": "Invalid credentials" }));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_409() {
        let ctx = TestContext::new();
        let server = server(&ctx);
        let payload = json!({
            "username": "river_saver",
            "email": "river@example.com",
            "password": "hunter22"
        });

        server
            .post("/api/auth/register")
            .json(&payload)
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/api/auth/register")
            .json(&payload)
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_register_invalid_payload_is_400() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let response = server
            .post("/api/auth/register")
            .json(&json!({ "username": "x", "email": "nope", "password": "1" }))
            .await;
        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert!(body["errors"].is_array());

        server
            .post("/api/auth/register")
            .json(&json!({ "email": "river@example.com" }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_register_stores_email_lowercased() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let register = server
            .post("/api/auth/register")
            .json(&json!({
                "username": "river_saver",
                "email": "River@Example.COM",
                "password": "hunter22"
            }))
            .await;
        register.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = register.json();
        assert_eq!(body["user"]["email"], "river@example.com");

        let login = server
            .post("/api/auth/login")
            .json(&json!({ "email": "RIVER@example.com", "password": "hunter22" }))
            .await;
        login.assert_status_ok();
        let body: serde_json::Value = login.json();
        assert_eq!(body["user"]["email"], "river@example.com");
    }
}
