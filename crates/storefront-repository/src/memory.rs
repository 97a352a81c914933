//! In-memory repository.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use storefront_core::{EntityId, Persistable, Repository, StorefrontError, StorefrontResult};
use tracing::debug;

/// Repository keeping entities in memory, keyed by identifier.
///
/// Identifiers come from a per-repository sequence starting at 1. Entities
/// saved with an identifier of their own keep it and move the sequence past it.
pub struct InMemoryRepository<E: Persistable> {
    entities: RwLock<BTreeMap<EntityId, E>>,
    sequence: AtomicI64,
}

impl<E: Persistable> InMemoryRepository<E> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    /// Entities matching `predicate`, in id order.
    pub fn filter<F>(&self, predicate: F) -> Vec<E>
    where
        F: Fn(&E) -> bool,
    {
        self.entities
            .read()
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    /// Whether any stored entity matches `predicate`.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&E) -> bool,
    {
        self.entities.read().values().any(predicate)
    }

    fn next_id(&self) -> StorefrontResult<EntityId> {
        self.sequence
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| current.checked_add(1))
            .map(|previous| EntityId(previous + 1))
            .map_err(|_| StorefrontError::Repository(format!("{} id sequence exhausted", E::KIND)))
    }

    fn persist(&self, mut entity: E) -> StorefrontResult<E> {
        if let Some(id) = entity.id() {
            self.sequence.fetch_max(id.into_inner(), Ordering::SeqCst);
        }
        entity.assign_identity(&mut || self.next_id())?;
        Ok(entity)
    }
}

impl<E: Persistable> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Persistable> Repository<E> for InMemoryRepository<E> {
    async fn find_by_id(&self, id: EntityId) -> StorefrontResult<Option<E>> {
        Ok(self.entities.read().get(&id).cloned())
    }

    async fn find_all(&self) -> StorefrontResult<Vec<E>> {
        Ok(self.entities.read().values().cloned().collect())
    }

    async fn save(&self, entity: E) -> StorefrontResult<E> {
        let entity = self.persist(entity)?;
        // assign_identity always leaves the root with an id
        if let Some(id) = entity.id() {
            debug!("Saving {} {}", E::KIND, id);
            self.entities.write().insert(id, entity.clone());
        }
        Ok(entity)
    }

    async fn delete(&self, id: EntityId) -> StorefrontResult<bool> {
        Ok(self.entities.write().remove(&id).is_some())
    }

    async fn exists(&self, id: EntityId) -> StorefrontResult<bool> {
        Ok(self.entities.read().contains_key(&id))
    }

    async fn count(&self) -> StorefrontResult<u64> {
        Ok(self.entities.read().len() as u64)
    }
}
