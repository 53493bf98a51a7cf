//! In-memory repository
//!
//! One [`Repository`] owns the canonical collection of a single entity type
//! together with its identifier allocator. The collection lives behind a
//! single async `RwLock`, so concurrent requests never observe a torn
//! collection; the allocator is atomic and only advanced under the write lock,
//! which keeps ids in insertion order.

use super::Entity;
use crate::{Error, Result};
use clinic_models::EntityId;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Debug)]
pub struct Repository<T: Entity> {
    entries: RwLock<Vec<T>>,
    next_id: AtomicU64,
}

impl<T: Entity> Repository<T> {
    /// Create an empty repository whose first allocated id is `first_id`
    pub fn new(first_id: EntityId) -> Self {
        Self::with_entries(first_id, Vec::new())
    }

    /// Create a repository from injected initial state.
    ///
    /// Entries keep their ids; the allocator starts after the highest
    /// existing id (or at `first_id`, whichever is larger).
    pub fn with_entries(first_id: EntityId, entries: Vec<T>) -> Self {
        let first_id = first_id.max(1);
        let next_id = entries
            .iter()
            .map(|e| e.id() + 1)
            .max()
            .map_or(first_id, |after_last| after_last.max(first_id));

        Self {
            entries: RwLock::new(entries),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Snapshot of the whole collection in insertion order
    pub async fn list(&self) -> Vec<T> {
        let entries = self.entries.read().await;
        tracing::debug!(
            collection = T::COLLECTION,
            count = entries.len(),
            "Listing entities"
        );
        entries.clone()
    }

    pub async fn get(&self, id: EntityId) -> Result<T> {
        let entries = self.entries.read().await;
        match entries.iter().find(|e| e.id() == id) {
            Some(entity) => {
                tracing::debug!(collection = T::COLLECTION, id, "Entity found");
                Ok(entity.clone())
            }
            None => Err(not_found::<T>(id)),
        }
    }

    /// Validate and insert `entity`, returning the stored copy with its
    /// allocated id.
    ///
    /// A non-zero caller id that collides with a stored entity is rejected as
    /// a duplicate; any other caller id is discarded.
    pub async fn add(&self, mut entity: T) -> Result<T> {
        if let Err(err) = entity.validate() {
            tracing::warn!(collection = T::COLLECTION, error = %err, "Rejected invalid entity");
            return Err(err.into());
        }

        let mut entries = self.entries.write().await;

        let requested = entity.id();
        if requested != 0 && entries.iter().any(|e| e.id() == requested) {
            tracing::warn!(
                collection = T::COLLECTION,
                id = requested,
                "Rejected duplicate entity"
            );
            return Err(Error::Duplicate {
                kind: T::KIND,
                id: requested,
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(id);
        entity.prepare();
        entries.push(entity.clone());

        crate::metrics::record_collection_size(T::COLLECTION, entries.len());
        tracing::info!(collection = T::COLLECTION, id, "Entity added");

        Ok(entity)
    }

    /// Overwrite every field of the stored entity `id` with `values`,
    /// keeping the id. Nothing is mutated when the lookup or validation fails.
    pub async fn update(&self, id: EntityId, mut values: T) -> Result<T> {
        let mut entries = self.entries.write().await;

        let Some(existing) = entries.iter_mut().find(|e| e.id() == id) else {
            return Err(not_found::<T>(id));
        };

        if let Err(err) = values.validate() {
            tracing::warn!(collection = T::COLLECTION, id, error = %err, "Rejected invalid update");
            return Err(err.into());
        }

        values.set_id(id);
        values.prepare();
        *existing = values.clone();

        tracing::info!(collection = T::COLLECTION, id, "Entity updated");
        Ok(values)
    }

    pub async fn delete(&self, id: EntityId) -> Result<()> {
        let mut entries = self.entries.write().await;

        let Some(position) = entries.iter().position(|e| e.id() == id) else {
            return Err(not_found::<T>(id));
        };
        entries.remove(position);

        crate::metrics::record_collection_size(T::COLLECTION, entries.len());
        tracing::info!(collection = T::COLLECTION, id, "Entity deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

fn not_found<T: Entity>(id: EntityId) -> Error {
    tracing::warn!(collection = T::COLLECTION, id, "Entity not found");
    Error::not_found(T::KIND, id)
}
