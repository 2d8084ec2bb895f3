/// Business domain models
pub mod business;

/// Field validation rules
pub mod validation;

/// Repository interfaces
pub mod repository;
