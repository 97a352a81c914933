//! CRUD service trait definition.

use crate::dto::Dto;
use async_trait::async_trait;
use storefront_core::{Entity, EntityId, Interface, StorefrontResult};

/// Generic create/read/update/delete service over one entity type and its
/// transfer object.
#[async_trait]
pub trait CrudService<E: Entity, D: Dto>: Interface + Send + Sync {
    /// Creates a new entity. Any identity in `dto` is discarded.
    async fn insert(&self, dto: D) -> StorefrontResult<D>;

    /// Updates the entity stored under `id`.
    ///
    /// Fails with a conflict when the DTO identifies a different entity.
    async fn update(&self, id: EntityId, dto: D) -> StorefrontResult<D>;

    /// Gets an entity by ID.
    async fn find_by_id(&self, id: EntityId) -> StorefrontResult<Option<E>>;

    /// Gets the DTO of an entity by ID, failing when it does not exist.
    async fn find_dto_by_id(&self, id: EntityId) -> StorefrontResult<D>;

    /// Lists all entities.
    async fn find_all(&self) -> StorefrontResult<Vec<E>>;

    /// Deletes an entity. Returns `false` when nothing was stored under `id`.
    async fn delete_by_id(&self, id: EntityId) -> StorefrontResult<bool>;

    /// Human readable name of the managed entity type.
    fn entity_name(&self) -> &'static str {
        E::KIND.as_str()
    }
}
