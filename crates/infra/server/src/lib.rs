//! # Eventdesk Server
//!
//! Standalone registration server: wires the in-memory adapter into the
//! registration routes and serves them over HTTP.

mod config;

pub use config::{load_config, ConfigError, ServerConfig};

use std::net::SocketAddr;
use std::sync::Arc;

use eventdesk_adapter_memory::MemoryAdapter;
use eventdesk_axum::{registration_routes, ApiState};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// The registration server.
pub struct RegistrationServer {
    /// Server configuration.
    pub config: ServerConfig,
}

impl RegistrationServer {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Builds the application router over a fresh in-memory store.
    ///
    /// The store lives for the whole process and is torn down with it.
    pub fn router(&self) -> axum::Router {
        let adapter = Arc::new(MemoryAdapter::new());
        let state = ApiState::new(adapter);

        registration_routes(state)
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
    }

    /// Starts the server.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Eventdesk server listening on {}", addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

impl Default for RegistrationServer {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
