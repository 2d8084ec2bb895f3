//!
//! Onboard Server - Main application server for the Onboard Platform
//!
//! This module exports all the components of the Onboard Server.

// External dependencies
use std::sync::Arc;

/// API module
pub mod api;

/// Server module
pub mod server;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

// Re-export key types
pub use config::ServerConfig;
pub use server::OnboardServer;
pub use error::{ServerError, ServerResult};

/// Run function
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    // Initialize logging
    init_logging(&config);

    // Create dependencies
    let store = create_business_store(&config)?;

    // Create server
    let server = OnboardServer::new(config, store);

    // Run server
    server.run().await
}

/// Initialize logging
fn init_logging(config: &ServerConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    // Create filter based on config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Create business state store
pub fn create_business_store(
    config: &ServerConfig,
) -> ServerResult<Arc<dyn onboard_core::BusinessRepository>> {
    if config.state_store_url.starts_with("memory://") {
        // Use in-memory business store for development and testing
        tracing::info!("Using in-memory business store");
        let store = onboard_state_inmemory::InMemoryBusinessStore::new();
        return Ok(Arc::new(store));
    }

    Err(ServerError::ConfigurationError(format!(
        "Unsupported state store URL: {}",
        config.state_store_url
    )))
}
