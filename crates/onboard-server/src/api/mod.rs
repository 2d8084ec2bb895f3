//! API module for the Onboard Server
//!
//! This module contains the API routes and handlers for the Onboard Server.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod businesses;
pub mod errors;
pub mod health;

use crate::server::OnboardServer;

/// Build the router for API endpoints
pub fn build_router(server: Arc<OnboardServer>) -> Router {
    Router::new()
        // Business management
        .route(
            "/businesses",
            get(businesses::list_businesses_handler).post(businesses::create_business_handler),
        )
        .route(
            "/businesses/:business_id",
            get(businesses::get_business_handler)
                .put(businesses::update_business_handler)
                .patch(businesses::update_business_handler)
                .delete(businesses::delete_business_handler),
        )
        // Workflow
        .route(
            "/businesses/:business_id/update_workflow",
            post(businesses::update_workflow_handler),
        )
        // Health check
        .route("/health", get(health::health_check))
        // Request tracing
        .layer(TraceLayer::new_for_http())
        // Shared state
        .with_state(server)
}

// Re-export all modules for easier imports
pub use businesses::*;
pub use errors::*;
pub use health::*;
