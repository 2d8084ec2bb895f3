//! Error types for the Onboard Server
//!
//! This module contains the error types used throughout the server.

use onboard_core::{CoreError, ValidationError};
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(ValidationError),

    /// Workflow precondition rejected the request
    #[error("Workflow precondition failed: {0}")]
    WorkflowPrecondition(String),

    /// FEIN already taken by another business
    #[error("A business with FEIN {0} already exists")]
    DuplicateFein(String),

    /// State store error
    #[error("State store error: {0}")]
    StateStoreError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

// Implement conversions from other error types
impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(validation) => ServerError::ValidationError(validation),
            CoreError::WorkflowPrecondition(msg) => ServerError::WorkflowPrecondition(msg),
            CoreError::BusinessNotFound(id) => ServerError::NotFound(format!("Business {}", id)),
            CoreError::DuplicateFein(fein) => ServerError::DuplicateFein(fein),
            CoreError::StateStoreError(msg) => ServerError::StateStoreError(msg),
        }
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}
