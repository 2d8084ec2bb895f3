//! Health check endpoint for the Onboard Server
//!
//! This module contains the health check handler.

use axum::{
    extract::State,
    response::IntoResponse,
    Json,
    http::StatusCode,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::server::OnboardServer;

/// Health check handler
///
/// This endpoint provides basic health information about the server and
/// checks the state store it depends on.
pub async fn health_check(
    State(server): State<Arc<OnboardServer>>,
) -> impl IntoResponse {
    info!("Health check requested");

    // Perform basic health check
    let mut response = json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {},
    });

    // Check state store
    let state_store_status = match server.check_state_store_health().await {
        Ok(true) => "UP",
        Ok(false) => "DEGRADED",
        Err(_) => "DOWN",
    };
    response["dependencies"]["stateStore"] = json!({
        "status": state_store_status,
    });

    // Determine overall status
    let overall_status = if state_store_status == "DOWN" {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (overall_status, Json(response))
}
