//! Main Onboard Server implementation
//!
//! This module contains the OnboardServer implementation.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, info_span, Instrument};

use onboard_core::{
    Business, BusinessId, BusinessRepository, CreateBusinessRequest, OnboardingService,
    UpdateBusinessRequest,
};

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Main server implementation
#[derive(Clone)]
pub struct OnboardServer {
    /// Configuration
    pub config: ServerConfig,

    /// Business state store
    store: Arc<dyn BusinessRepository>,

    /// Onboarding application service
    service: Arc<OnboardingService>,
}

/// Manual Debug implementation that doesn't try to debug the trait objects
impl std::fmt::Debug for OnboardServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardServer")
            .field("config", &self.config)
            .finish()
    }
}

impl OnboardServer {
    /// Create a new OnboardServer
    pub fn new(config: ServerConfig, store: Arc<dyn BusinessRepository>) -> Self {
        let service = Arc::new(OnboardingService::new(store.clone()));
        Self {
            config,
            store,
            service,
        }
    }

    /// Run the server
    pub async fn run(self) -> ServerResult<()> {
        info!("Starting Onboard Server");

        let addr = format!("{}:{}", self.config.bind_address, self.config.port);

        // Build the API router
        let app = crate::api::build_router(Arc::new(self));

        // Create and bind the TCP listener
        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        // Run the server
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// List all businesses in creation order
    pub async fn list_businesses(&self) -> ServerResult<Vec<Business>> {
        Ok(self.service.list_businesses().await?)
    }

    /// Create a business and run its first workflow transition
    pub async fn create_business(&self, request: CreateBusinessRequest) -> ServerResult<Business> {
        let span = info_span!("create_business", fein = %request.fein);
        async move {
            info!("Creating business");
            Ok(self.service.create_business(request).await?)
        }
        .instrument(span)
        .await
    }

    /// Get a business by ID
    pub async fn get_business(&self, business_id: &str) -> ServerResult<Business> {
        let id = BusinessId(business_id.to_string());
        Ok(self.service.get_business(&id).await?)
    }

    /// Apply field updates to a business and advance its workflow
    pub async fn update_business(
        &self,
        business_id: &str,
        request: UpdateBusinessRequest,
    ) -> ServerResult<Business> {
        let span = info_span!("update_business", %business_id);
        async move {
            info!("Updating business");
            let id = BusinessId(business_id.to_string());
            Ok(self.service.update_business(&id, request).await?)
        }
        .instrument(span)
        .await
    }

    /// Delete a business together with its embedded contact
    pub async fn delete_business(&self, business_id: &str) -> ServerResult<()> {
        let id = BusinessId(business_id.to_string());
        Ok(self.service.delete_business(&id).await?)
    }

    /// Check state store health
    pub async fn check_state_store_health(&self) -> ServerResult<bool> {
        // A simple health check - try to count stored businesses
        match self.store.count().await {
            Ok(_) => Ok(true),
            Err(err) => {
                error!(?err, "State store health check failed");
                Err(err.into())
            }
        }
    }
}
