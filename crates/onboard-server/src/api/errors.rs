//! Error handling for the Onboard Server API
//!
//! This module contains standardized error handling for the API.

use axum::{
    response::IntoResponse,
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::error::ServerError;

/// General error response handler for API errors
/// This will convert a server error into a standardized API error response
pub fn api_error_response(err: &ServerError) -> axum::response::Response {
    // Determine status code and error code based on error type
    let (status_code, error_code, error_message, field) = match err {
        ServerError::NotFound(resource) => (
            StatusCode::NOT_FOUND,
            "ERR_NOT_FOUND".to_string(),
            format!("{} not found", resource),
            None,
        ),
        ServerError::ValidationError(validation) => (
            StatusCode::BAD_REQUEST,
            validation.code.to_string(),
            validation.message.clone(),
            validation.field,
        ),
        ServerError::WorkflowPrecondition(msg) => (
            StatusCode::BAD_REQUEST,
            "ERR_WORKFLOW_PRECONDITION".to_string(),
            msg.clone(),
            None,
        ),
        ServerError::DuplicateFein(fein) => (
            StatusCode::BAD_REQUEST,
            "ERR_DUPLICATE_FEIN".to_string(),
            format!("A business with FEIN {} already exists.", fein),
            Some("fein"),
        ),
        ServerError::StateStoreError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_STATE_STORE_ERROR".to_string(),
            msg.clone(),
            None,
        ),
        ServerError::ConfigurationError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_CONFIGURATION_ERROR".to_string(),
            msg.clone(),
            None,
        ),
        ServerError::InternalError(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "ERR_INTERNAL_SERVER_ERROR".to_string(),
            msg.clone(),
            None,
        ),
    };

    // Create standardized error response
    let mut error_response = json!({
        "error": error_message,
        "errorDetails": {
            "errorCode": error_code,
            "errorMessage": error_message,
        }
    });
    if let Some(field) = field {
        error_response["errorDetails"]["field"] = json!(field);
    }

    (status_code, Json(error_response)).into_response()
}
