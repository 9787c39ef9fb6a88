//! Eventdesk server binary.

use eventdesk_server::{load_config, RegistrationServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = match std::env::var("EVENTDESK_CONFIG") {
        Ok(path) => load_config(&path)?,
        Err(_) => ServerConfig::default(),
    };

    // Initialize tracing
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Create and run server
    let server = RegistrationServer::new(config);
    server.run().await?;

    Ok(())
}
