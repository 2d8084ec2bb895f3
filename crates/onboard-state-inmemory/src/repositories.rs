use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use onboard_core::{
    domain::business::{Business, BusinessId},
    domain::repository::BusinessRepository,
    CoreError,
};

// Both maps sit behind one lock so the FEIN uniqueness check and the write
// happen in a single critical section.
#[derive(Default)]
struct StoreInner {
    businesses: HashMap<String, Business>,
    fein_index: HashMap<String, String>,
}

/// In-memory implementation of the BusinessRepository
pub struct InMemoryBusinessStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryBusinessStore {
    /// Create a new in-memory business store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
        }
    }
}

impl Default for InMemoryBusinessStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessStore {
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.businesses.get(&id.0).cloned())
    }

    async fn insert(&self, business: &Business) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;

        if inner.fein_index.contains_key(business.fein.as_str()) {
            return Err(CoreError::DuplicateFein(business.fein.to_string()));
        }

        inner
            .fein_index
            .insert(business.fein.to_string(), business.id.0.clone());
        inner
            .businesses
            .insert(business.id.0.clone(), business.clone());

        debug!(business_id = %business.id, "Inserted business");
        Ok(())
    }

    async fn update(&self, business: &Business) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;

        if !inner.businesses.contains_key(&business.id.0) {
            return Err(CoreError::BusinessNotFound(business.id.0.clone()));
        }

        // FEIN is immutable, so the index needs no maintenance here
        inner
            .businesses
            .insert(business.id.0.clone(), business.clone());

        debug!(business_id = %business.id, "Updated business");
        Ok(())
    }

    async fn delete(&self, id: &BusinessId) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;

        if let Some(business) = inner.businesses.remove(&id.0) {
            inner.fein_index.remove(business.fein.as_str());
            debug!(business_id = %id, "Deleted business");
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Business>, CoreError> {
        let inner = self.inner.read().await;

        let mut result: Vec<Business> = inner.businesses.values().cloned().collect();
        result.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });

        Ok(result)
    }

    async fn count(&self) -> Result<usize, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.businesses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::domain::business::{Fein, Industry};

    fn make_business(fein: &str) -> Business {
        Business::new(
            Fein::parse(fein).unwrap(),
            "Acme Foods".to_string(),
            Some(Industry::Restaurants),
            None,
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryBusinessStore::new();
        let business = make_business("123456789");

        store.insert(&business).await.unwrap();

        let found = store.find_by_id(&business.id).await.unwrap().unwrap();
        assert_eq!(found.id, business.id);
        assert_eq!(found.fein, business.fein);

        assert!(store
            .find_by_id(&BusinessId("missing".to_string()))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_fein() {
        let store = InMemoryBusinessStore::new();
        store.insert(&make_business("123456789")).await.unwrap();

        let error = store.insert(&make_business("123456789")).await.unwrap_err();
        assert_eq!(error, CoreError::DuplicateFein("123456789".to_string()));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_requires_existing_record() {
        let store = InMemoryBusinessStore::new();
        let business = make_business("123456789");

        let error = store.update(&business).await.unwrap_err();
        assert_eq!(error, CoreError::BusinessNotFound(business.id.0.clone()));

        store.insert(&business).await.unwrap();

        let mut changed = business.clone();
        changed.name = "Acme Holdings".to_string();
        store.update(&changed).await.unwrap();

        let found = store.find_by_id(&business.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Acme Holdings");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_and_frees_fein() {
        let store = InMemoryBusinessStore::new();
        let business = make_business("123456789");
        store.insert(&business).await.unwrap();

        store.delete(&business.id).await.unwrap();
        store.delete(&business.id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);

        // The FEIN can be taken again once its owner is gone
        store.insert(&make_business("123456789")).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_all_in_creation_order() {
        let store = InMemoryBusinessStore::new();
        let first = make_business("111111111");
        let second = make_business("222222222");

        store.insert(&first).await.unwrap();
        store.insert(&second).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }
}
