//! In-memory state store implementation for the Onboard platform
//!
//! This crate provides an in-memory implementation of the business repository
//! interface defined in the onboard-core crate. It is primarily useful for
//! development, testing, and simple deployments where persistence is not required.

pub mod repositories;
pub use repositories::InMemoryBusinessStore;
