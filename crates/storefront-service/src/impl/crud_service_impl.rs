//! Generic CRUD service implementation.

use crate::crud_service::CrudService;
use crate::dto::Dto;
use crate::rules::{EntityRules, NoRules};
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use storefront_core::{
    EntityId, Mapper, Persistable, Repository, Resolver, StorefrontError, StorefrontResult, ValidateExt,
};
use tracing::{debug, info};

/// CRUD service built from a repository, a mapper and a set of rules.
pub struct CrudServiceImpl<E, D, M, R>
where
    E: Persistable,
    D: Dto,
    M: Mapper<E, D>,
    R: Repository<E>,
{
    repository: Arc<R>,
    resolver: Arc<dyn Resolver>,
    mapper: M,
    rules: Arc<dyn EntityRules<E>>,
    _dto: PhantomData<fn() -> D>,
}

impl<E, D, M, R> CrudServiceImpl<E, D, M, R>
where
    E: Persistable,
    D: Dto,
    M: Mapper<E, D>,
    R: Repository<E>,
{
    /// Creates a service without business rules.
    pub fn new(repository: Arc<R>, resolver: Arc<dyn Resolver>, mapper: M) -> Self {
        Self {
            repository,
            resolver,
            mapper,
            rules: Arc::new(NoRules),
            _dto: PhantomData,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Arc<dyn EntityRules<E>>) -> Self {
        self.rules = rules;
        self
    }

    async fn save_checked(&self, entity: E) -> StorefrontResult<D> {
        self.rules.before_save(&entity).await?;
        let saved = self.repository.save(entity).await?;
        Ok(self.mapper.to_dto(&saved)?)
    }
}

#[async_trait]
impl<E, D, M, R> CrudService<E, D> for CrudServiceImpl<E, D, M, R>
where
    E: Persistable,
    D: Dto,
    M: Mapper<E, D> + 'static,
    R: Repository<E> + 'static,
{
    async fn insert(&self, mut dto: D) -> StorefrontResult<D> {
        debug!("Inserting {}", E::KIND);

        dto.validate_request()?;
        dto.clear_ids();

        let entity = self.mapper.from_dto(dto, self.resolver.as_ref()).await?;
        let saved = self.save_checked(entity).await?;

        info!("{} created: {:?}", E::KIND, saved.id());
        Ok(saved)
    }

    async fn update(&self, id: EntityId, dto: D) -> StorefrontResult<D> {
        debug!("Updating {}: {}", E::KIND, id);

        dto.validate_request()?;

        if dto.id() != Some(id) {
            let provided = dto.id().map_or_else(|| "none".to_string(), |other| other.to_string());
            return Err(StorefrontError::conflict(format!(
                "The provided ID ({id}) does not match the {} ID ({provided})",
                E::KIND
            )));
        }

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| StorefrontError::not_found(E::KIND.as_str(), id))?;

        let entity = self.mapper.apply_update(&existing, dto, self.resolver.as_ref()).await?;
        let saved = self.save_checked(entity).await?;

        info!("{} updated: {}", E::KIND, id);
        Ok(saved)
    }

    async fn find_by_id(&self, id: EntityId) -> StorefrontResult<Option<E>> {
        debug!("Getting {}: {}", E::KIND, id);
        self.repository.find_by_id(id).await
    }

    async fn find_dto_by_id(&self, id: EntityId) -> StorefrontResult<D> {
        let entity = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| StorefrontError::not_found(E::KIND.as_str(), id))?;
        Ok(self.mapper.to_dto(&entity)?)
    }

    async fn find_all(&self) -> StorefrontResult<Vec<E>> {
        debug!("Listing {}", E::KIND);
        self.repository.find_all().await
    }

    async fn delete_by_id(&self, id: EntityId) -> StorefrontResult<bool> {
        debug!("Deleting {}: {}", E::KIND, id);

        let Some(existing) = self.repository.find_by_id(id).await? else {
            return Ok(false);
        };
        self.rules.before_delete(&existing).await?;

        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!("{} deleted: {}", E::KIND, id);
        }
        Ok(deleted)
    }
}
