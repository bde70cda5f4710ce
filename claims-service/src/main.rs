use claims_service::config::ClaimsConfig;
use claims_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    // Default level before config load; the config crate reads env/.env too.
    let log_level = std::env::var("APP__LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_tracing("claims-service", &log_level, otlp_endpoint.as_deref());

    let config = ClaimsConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("Claims service listening on port {}", app.port());

    app.run_until_stopped().await
}
