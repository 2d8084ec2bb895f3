//!
//! Onboard Core - Core domain model for the Onboard platform
//!
//! This crate defines the business aggregate, the onboarding workflow state
//! machine, the validation rules, and the repository interfaces for the
//! Onboard platform. It is the foundation for the state store and server
//! crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - business records, workflow rules, and validation
pub mod domain;

/// Application services - onboarding use cases
pub mod application;

/// Error types
pub mod error;

// Re-export key types
pub use error::CoreError;

// Re-export main API types for easy use
pub use domain::business::{
    Business, BusinessId, Contact, Fein, Industry, StageDecision, WorkflowStage,
};
pub use domain::repository::BusinessRepository;
pub use domain::validation::ValidationError;

// Application interfaces
pub use application::onboarding_service::{
    ContactPayload, CreateBusinessRequest, OnboardingService, UpdateBusinessRequest,
};
