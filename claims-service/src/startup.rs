//! Application startup and lifecycle management.

use crate::config::ClaimsConfig;
use crate::services::providers::azure_openai::AzureOpenAiClient;
use crate::services::providers::CompletionClient;
use crate::services::{ClaimsRepository, NotesRepository, Summarizer};
use crate::{build_router, AppState};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ClaimsConfig) -> Result<Self, AppError> {
        let completion: Arc<dyn CompletionClient> =
            Arc::new(AzureOpenAiClient::new(config.openai.clone()));

        tracing::info!(
            deployment = %config.openai.deployment,
            "Initialized Azure OpenAI completion client"
        );

        let summarizer = Summarizer::new(completion);
        let claims = ClaimsRepository::new(&config.data.claims_path);
        let notes = NotesRepository::new(&config.data.notes_path);

        tracing::info!(
            claims_path = %config.data.claims_path,
            notes_path = %config.data.notes_path,
            "Initialized data repositories"
        );

        let state = AppState {
            config: config.clone(),
            claims,
            notes,
            summarizer,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
