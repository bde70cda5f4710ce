pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::http::{header, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use service_core::middleware::tracing::request_id_middleware;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ClaimsConfig;
use crate::services::{ClaimsRepository, NotesRepository, Summarizer};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::claims::get_claim,
        handlers::claims::summarize_claim_notes,
    ),
    components(
        schemas(
            dtos::ClaimResponse,
            dtos::SummaryResponse,
            dtos::ErrorResponse,
        )
    ),
    tags(
        (name = "Claims", description = "Claim status lookup and note summarization"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ClaimsConfig,
    pub claims: ClaimsRepository,
    pub notes: NotesRepository,
    pub summarizer: Summarizer,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/api/claims/:id", get(handlers::claims::get_claim))
        .route(
            "/api/claims/:id/summarize",
            post(handlers::claims::summarize_claim_notes),
        )
        .with_state(state)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        // Add CORS layer
        .layer(
            CorsLayer::new()
                .allow_origin(HeaderValue::from_static("*"))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}
