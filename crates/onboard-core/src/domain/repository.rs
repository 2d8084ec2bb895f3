//! Repository traits for the Onboard core
//!
//! This module defines the repository trait used by the application layer.
//! External crates implement it to provide different persistence mechanisms.

use async_trait::async_trait;

use super::business::{Business, BusinessId};
use crate::CoreError;

/// Repository for business records
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find a business by ID
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, CoreError>;

    /// Insert a new business, rejecting a FEIN that is already taken
    async fn insert(&self, business: &Business) -> Result<(), CoreError>;

    /// Replace an existing business
    async fn update(&self, business: &Business) -> Result<(), CoreError>;

    /// Delete a business; deleting an unknown ID is a no-op
    async fn delete(&self, id: &BusinessId) -> Result<(), CoreError>;

    /// List all businesses in creation order
    async fn list_all(&self) -> Result<Vec<Business>, CoreError>;

    /// Count stored businesses
    async fn count(&self) -> Result<usize, CoreError>;
}

/// Memory implementations for testing
#[cfg(feature = "testing")]
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory implementation of the business repository
    pub struct MemoryBusinessRepository {
        businesses: std::sync::Arc<RwLock<HashMap<String, Business>>>,
    }

    impl MemoryBusinessRepository {
        /// Create a new memory business repository
        pub fn new() -> Self {
            Self {
                businesses: std::sync::Arc::new(RwLock::new(HashMap::new())),
            }
        }
    }

    impl Default for MemoryBusinessRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl BusinessRepository for MemoryBusinessRepository {
        async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, CoreError> {
            let businesses = self.businesses.read().map_err(|e| {
                CoreError::StateStoreError(format!("Failed to acquire read lock: {}", e))
            })?;

            Ok(businesses.get(&id.0).cloned())
        }

        async fn insert(&self, business: &Business) -> Result<(), CoreError> {
            let mut businesses = self.businesses.write().map_err(|e| {
                CoreError::StateStoreError(format!("Failed to acquire write lock: {}", e))
            })?;

            if businesses.values().any(|b| b.fein == business.fein) {
                return Err(CoreError::DuplicateFein(business.fein.to_string()));
            }

            businesses.insert(business.id.0.clone(), business.clone());

            Ok(())
        }

        async fn update(&self, business: &Business) -> Result<(), CoreError> {
            let mut businesses = self.businesses.write().map_err(|e| {
                CoreError::StateStoreError(format!("Failed to acquire write lock: {}", e))
            })?;

            if !businesses.contains_key(&business.id.0) {
                return Err(CoreError::BusinessNotFound(business.id.0.clone()));
            }

            businesses.insert(business.id.0.clone(), business.clone());

            Ok(())
        }

        async fn delete(&self, id: &BusinessId) -> Result<(), CoreError> {
            let mut businesses = self.businesses.write().map_err(|e| {
                CoreError::StateStoreError(format!("Failed to acquire write lock: {}", e))
            })?;

            businesses.remove(&id.0);

            Ok(())
        }

        async fn list_all(&self) -> Result<Vec<Business>, CoreError> {
            let businesses = self.businesses.read().map_err(|e| {
                CoreError::StateStoreError(format!("Failed to acquire read lock: {}", e))
            })?;

            let mut result: Vec<Business> = businesses.values().cloned().collect();
            result.sort_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.id.0.cmp(&b.id.0))
            });

            Ok(result)
        }

        async fn count(&self) -> Result<usize, CoreError> {
            let businesses = self.businesses.read().map_err(|e| {
                CoreError::StateStoreError(format!("Failed to acquire read lock: {}", e))
            })?;

            Ok(businesses.len())
        }
    }
}
