//! Integration tests for the claims service startup path.
//!
//! These spawn the full application (with the real Azure OpenAI client
//! constructed from test configuration) and probe the health endpoints.
//! Run with: cargo test -p claims-service --test health_check

use claims_service::config::ClaimsConfig;
use claims_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("OPENAI_ENDPOINT", "https://example.openai.azure.com");
    std::env::set_var("OPENAI_API_KEY", "test-api-key");
    std::env::set_var("OPENAI_DEPLOYMENT", "gpt-4o-mini");

    let config = ClaimsConfig::load().expect("Failed to load config");
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Invalid JSON body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "claims-service");
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}
