//! Core trait for entities held by a repository

use clinic_models::EntityId;
use clinic_validator::Validate;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// An entity type that can be stored in a [`Repository`](super::Repository)
/// and exposed as a REST collection.
///
/// Identifiers are owned by the repository. On insert a non-zero caller `id`
/// that matches a stored entity is rejected as a duplicate; any other caller
/// `id` is replaced by the allocator. Updates keep the stored id.
pub trait Entity:
    Validate + Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Human-readable type name used in messages, e.g. `Patient`
    const KIND: &'static str;

    /// URL segment of the collection, e.g. `patients`
    const COLLECTION: &'static str;

    fn id(&self) -> EntityId;

    fn set_id(&mut self, id: EntityId);

    /// Derive server-assigned fields before the entity is stored.
    ///
    /// Runs on every add and update, after validation.
    fn prepare(&mut self) {}
}
