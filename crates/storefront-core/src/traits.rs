//! Core traits shared by the repository and service layers.

use crate::{City, Customer, District, EntityId, EntityKind, Interface, Product, StorefrontResult};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// A domain object with an optional persisted identity.
///
/// Every entity is serialisable; `id` is `None` until the persistence layer
/// assigns one.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The kind of this entity, used in error messages and lookups.
    const KIND: EntityKind;

    /// Returns the entity's identifier, if it has been persisted.
    fn id(&self) -> Option<EntityId>;

    /// Returns the same entity carrying the given identity.
    #[must_use]
    fn with_id(self, id: Option<EntityId>) -> Self;

    /// Checks if the entity is about to be inserted (no identity yet).
    fn is_inserting(&self) -> bool {
        self.id().is_none()
    }

    /// Checks if the entity is an already persisted one being edited.
    fn is_editing(&self) -> bool {
        !self.is_inserting()
    }

    /// Checks if the entity has the given identifier.
    fn is_same_id(&self, id: EntityId) -> bool {
        self.id() == Some(id)
    }

    /// Two instances are the same logical entity when they share a non-null id.
    fn is_same_entity(&self, other: &Self) -> bool {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}

/// Identity assignment, for use by persistence implementations only.
pub trait Persistable: Entity {
    /// Assigns identities that are still missing, drawing them from `next_id`.
    /// Existing identities are never replaced. Stops at the first failure of
    /// `next_id`.
    ///
    /// # Errors
    ///
    /// Returns the error of `next_id` when no identity can be produced.
    fn assign_identity(&mut self, next_id: &mut dyn FnMut() -> StorefrontResult<EntityId>) -> StorefrontResult<()>;
}

/// Looks up referenced entities by identifier.
///
/// Supplied by the persistence layer to the mappers. `Ok(None)` means no
/// entity of that kind has the identifier.
#[async_trait]
pub trait Resolver: Interface + Send + Sync {
    /// Finds a district by ID.
    async fn district(&self, id: EntityId) -> StorefrontResult<Option<District>>;

    /// Finds a city by ID.
    async fn city(&self, id: EntityId) -> StorefrontResult<Option<City>>;

    /// Finds a customer by ID.
    async fn customer(&self, id: EntityId) -> StorefrontResult<Option<Customer>>;

    /// Finds a product by ID.
    async fn product(&self, id: EntityId) -> StorefrontResult<Option<Product>>;
}

/// Bidirectional conversion between an entity and its transfer object.
///
/// Implementations are stateless; the only side effects of a call are the
/// lookups it performs on the supplied [`Resolver`].
#[async_trait]
pub trait Mapper<E, D>: Send + Sync
where
    E: Entity,
    D: Send + 'static,
{
    /// Projects an entity into its transfer object.
    fn to_dto(&self, entity: &E) -> Result<D, crate::MappingError>;

    /// Rebuilds an entity from a transfer object, resolving its references.
    async fn from_dto(&self, dto: D, resolver: &dyn Resolver) -> StorefrontResult<E>;

    /// Builds the updated state of `existing` from `dto`.
    ///
    /// The identity of `existing` is always kept, whatever the DTO says.
    async fn apply_update(&self, existing: &E, dto: D, resolver: &dyn Resolver) -> StorefrontResult<E> {
        let updated = self.from_dto(dto, resolver).await?;
        Ok(updated.with_id(existing.id()))
    }
}

/// Base repository trait for CRUD operations.
#[async_trait]
pub trait Repository<E>: Interface + Send + Sync
where
    E: Entity,
{
    /// Finds an entity by its ID.
    async fn find_by_id(&self, id: EntityId) -> StorefrontResult<Option<E>>;

    /// Returns all entities.
    async fn find_all(&self) -> StorefrontResult<Vec<E>>;

    /// Saves an entity, assigning identities to unpersisted parts.
    async fn save(&self, entity: E) -> StorefrontResult<E>;

    /// Deletes an entity by its ID.
    async fn delete(&self, id: EntityId) -> StorefrontResult<bool>;

    /// Checks if an entity exists by its ID.
    async fn exists(&self, id: EntityId) -> StorefrontResult<bool>;

    /// Counts all entities.
    async fn count(&self) -> StorefrontResult<u64>;
}
