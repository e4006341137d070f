//! In-memory implementation of LocationRepository
//!
//! Suitable for tests and for single-process deployments that do not need
//! durability.

use std::collections::BTreeMap;

use agri_shared::types::{PaginatedResponse, Pagination};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::location::Location;
use crate::errors::DomainError;

use super::trait_::LocationRepository;

#[derive(Default)]
struct Store {
    rows: BTreeMap<i64, Location>,
    last_id: i64,
}

/// In-memory location repository with auto-increment ids
#[derive(Default)]
pub struct InMemoryLocationRepository {
    store: RwLock<Store>,
}

impl InMemoryLocationRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn save(&self, mut location: Location) -> Result<Location, DomainError> {
        location.validate()?;

        let mut store = self.store.write().await;
        let id = match location.id {
            Some(id) => {
                // Keep auto-increment ahead of explicitly chosen ids
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                store.last_id = store.last_id.checked_add(1).ok_or_else(|| {
                    tracing::error!("Location id space exhausted");
                    DomainError::Internal {
                        message: "no location ids left to assign".to_string(),
                    }
                })?;
                store.last_id
            }
        };
        location.id = Some(id);
        store.rows.insert(id, location);

        tracing::debug!(location_id = id, "Saved location");
        Ok(location)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, DomainError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).copied())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let store = self.store.read().await;
        Ok(store.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;
        let removed = store.rows.remove(&id).is_some();
        if removed {
            tracing::debug!(location_id = id, "Deleted location");
        }
        Ok(removed)
    }

    async fn find_all(&self) -> Result<Vec<Location>, DomainError> {
        let store = self.store.read().await;
        Ok(store.rows.values().copied().collect())
    }

    async fn find_page(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Location>, DomainError> {
        let pagination = pagination.validate();
        let store = self.store.read().await;
        let data = store
            .rows
            .values()
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(pagination.limit() as usize)
            .copied()
            .collect();

        Ok(PaginatedResponse::new(data, pagination, store.rows.len() as u64))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let store = self.store.read().await;
        Ok(store.rows.len() as u64)
    }
}
