//! Error types for the core domain and application layers

use crate::domain::validation::ValidationError;
use thiserror::Error;

/// Errors produced by the core domain and application layers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A field failed format validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The business's current stage does not allow the requested update
    #[error("Workflow precondition failed: {0}")]
    WorkflowPrecondition(String),

    /// No business exists with the given identifier
    #[error("Business not found: {0}")]
    BusinessNotFound(String),

    /// Another business already holds the given FEIN
    #[error("A business with FEIN {0} already exists")]
    DuplicateFein(String),

    /// The state store failed to read or write
    #[error("State store error: {0}")]
    StateStoreError(String),
}
