//! Purchase and purchase item mappers.
//!
//! A line item that already exists is frozen: its product and quantity can
//! only be set when the item is created. Updates that try to change them are
//! dropped and reported as [`IgnoredChange`]s.

use super::{required_id, resolved};
use crate::dto::{PurchaseDto, PurchaseItemDto};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use storefront_config::MappingConfig;
use storefront_core::{
    Entity, EntityId, EntityKind, Mapper, MappingError, Purchase, PurchaseItem, Resolver, StorefrontError,
    StorefrontResult,
};
use tracing::{debug, warn};

/// A purchase item field that cannot change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImmutableField {
    Product,
    Quant,
}

impl fmt::Display for ImmutableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product => write!(f, "product"),
            Self::Quant => write!(f, "quant"),
        }
    }
}

/// An update attempt on an immutable purchase item field that was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoredChange {
    pub item_id: EntityId,
    pub field: ImmutableField,
}

/// Maps [`PurchaseItem`] to and from [`PurchaseItemDto`].
#[derive(Debug, Clone, Copy)]
pub struct PurchaseItemMapper {
    warn_on_ignored_changes: bool,
}

impl Default for PurchaseItemMapper {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PurchaseItemMapper {
    #[must_use]
    pub const fn new(warn_on_ignored_changes: bool) -> Self {
        Self { warn_on_ignored_changes }
    }

    #[must_use]
    pub const fn from_config(config: &MappingConfig) -> Self {
        Self::new(config.warn_on_ignored_changes)
    }

    /// Builds the updated state of `existing` and lists the changes that
    /// were dropped.
    ///
    /// A persisted item keeps its product and quantity; the DTO's
    /// `productId` is not even looked up. An item without identity is
    /// rebuilt from the DTO like on insert.
    pub async fn apply_update_reporting(
        &self,
        existing: &PurchaseItem,
        dto: PurchaseItemDto,
        resolver: &dyn Resolver,
    ) -> StorefrontResult<(PurchaseItem, Vec<IgnoredChange>)> {
        let Some(item_id) = existing.id() else {
            let purchase_id = dto.purchase_id.or_else(|| existing.purchase_id());
            let item = self.from_dto(dto, resolver).await?;
            return Ok((item.with_id(None).with_purchase_id(purchase_id), Vec::new()));
        };

        let mut ignored = Vec::new();
        if existing.product().and_then(Entity::id) != Some(dto.product_id) {
            ignored.push(IgnoredChange {
                item_id,
                field: ImmutableField::Product,
            });
        }
        if existing.quant() != dto.quant {
            ignored.push(IgnoredChange {
                item_id,
                field: ImmutableField::Quant,
            });
        }

        Ok((existing.clone(), ignored))
    }

    fn report(&self, ignored: &[IgnoredChange]) {
        for change in ignored {
            if self.warn_on_ignored_changes {
                warn!(item_id = %change.item_id, field = %change.field, "Ignoring change to immutable purchase item field");
            } else {
                debug!(item_id = %change.item_id, field = %change.field, "Ignoring change to immutable purchase item field");
            }
        }
    }
}

#[async_trait]
impl Mapper<PurchaseItem, PurchaseItemDto> for PurchaseItemMapper {
    fn to_dto(&self, entity: &PurchaseItem) -> Result<PurchaseItemDto, MappingError> {
        Ok(PurchaseItemDto {
            id: entity.id(),
            purchase_id: entity.purchase_id(),
            product_id: required_id(EntityKind::PurchaseItem, "product", entity.product())?,
            quant: entity.quant(),
        })
    }

    async fn from_dto(&self, dto: PurchaseItemDto, resolver: &dyn Resolver) -> StorefrontResult<PurchaseItem> {
        let product = resolved(dto.product_id, resolver.product(dto.product_id).await?)?;
        Ok(PurchaseItem::new(product, dto.quant)
            .with_id(dto.id)
            .with_purchase_id(dto.purchase_id))
    }

    async fn apply_update(
        &self,
        existing: &PurchaseItem,
        dto: PurchaseItemDto,
        resolver: &dyn Resolver,
    ) -> StorefrontResult<PurchaseItem> {
        let (item, ignored) = self.apply_update_reporting(existing, dto, resolver).await?;
        self.report(&ignored);
        Ok(item)
    }
}

/// Maps [`Purchase`] to and from [`PurchaseDto`], items included.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseMapper {
    items: PurchaseItemMapper,
}

impl PurchaseMapper {
    #[must_use]
    pub const fn new(items: PurchaseItemMapper) -> Self {
        Self { items }
    }

    #[must_use]
    pub const fn from_config(config: &MappingConfig) -> Self {
        Self::new(PurchaseItemMapper::from_config(config))
    }

    /// Builds the updated state of `existing` and lists the item changes
    /// that were dropped.
    ///
    /// Item DTOs carrying an id update the matching existing item; those
    /// without one become new items. Items missing from the DTO are removed
    /// and the DTO order is kept. `itens: null` clears the item list.
    pub async fn apply_update_reporting(
        &self,
        existing: &Purchase,
        dto: PurchaseDto,
        resolver: &dyn Resolver,
    ) -> StorefrontResult<(Purchase, Vec<IgnoredChange>)> {
        let customer = resolved(dto.customer_id, resolver.customer(dto.customer_id).await?)?;

        let mut ignored = Vec::new();
        let itens = match dto.itens {
            Some(item_dtos) => {
                let mut items = Vec::with_capacity(item_dtos.len());
                let mut matched = HashSet::new();
                for item_dto in item_dtos {
                    let item = match item_dto.id {
                        Some(item_id) => {
                            if !matched.insert(item_id) {
                                return Err(StorefrontError::conflict(format!(
                                    "PurchaseItem {item_id} is listed more than once"
                                )));
                            }
                            let current = existing
                                .itens()
                                .and_then(|its| its.iter().find(|it| it.is_same_id(item_id)))
                                .ok_or(MappingError::UnresolvedReference {
                                    kind: EntityKind::PurchaseItem,
                                    id: item_id,
                                })?;
                            let (item, mut dropped) =
                                self.items.apply_update_reporting(current, item_dto, resolver).await?;
                            ignored.append(&mut dropped);
                            item
                        }
                        None => self.items.from_dto(item_dto, resolver).await?,
                    };
                    items.push(item);
                }
                Some(items)
            }
            None => None,
        };

        let mut purchase = Purchase::new(customer).with_id(existing.id());
        purchase.set_date_time(dto.date_time);
        purchase.set_itens(itens);
        Ok((purchase, ignored))
    }
}

#[async_trait]
impl Mapper<Purchase, PurchaseDto> for PurchaseMapper {
    fn to_dto(&self, entity: &Purchase) -> Result<PurchaseDto, MappingError> {
        let itens = entity
            .itens()
            .map(|items| {
                items
                    .iter()
                    .map(|item| {
                        let mut dto = self.items.to_dto(item)?;
                        dto.purchase_id = dto.purchase_id.or(entity.id());
                        Ok(dto)
                    })
                    .collect::<Result<Vec<_>, MappingError>>()
            })
            .transpose()?;

        Ok(PurchaseDto {
            id: entity.id(),
            customer_id: required_id(EntityKind::Purchase, "customer", entity.customer())?,
            date_time: entity.date_time(),
            itens,
        })
    }

    async fn from_dto(&self, dto: PurchaseDto, resolver: &dyn Resolver) -> StorefrontResult<Purchase> {
        let customer = resolved(dto.customer_id, resolver.customer(dto.customer_id).await?)?;

        let itens = match dto.itens {
            Some(item_dtos) => {
                let mut items = Vec::with_capacity(item_dtos.len());
                for item_dto in item_dtos {
                    items.push(self.items.from_dto(item_dto, resolver).await?);
                }
                Some(items)
            }
            None => None,
        };

        let mut purchase = Purchase::new(customer).with_id(dto.id);
        purchase.set_date_time(dto.date_time);
        purchase.set_itens(itens);
        Ok(purchase)
    }

    async fn apply_update(&self, existing: &Purchase, dto: PurchaseDto, resolver: &dyn Resolver) -> StorefrontResult<Purchase> {
        let (purchase, ignored) = self.apply_update_reporting(existing, dto, resolver).await?;
        self.items.report(&ignored);
        Ok(purchase)
    }
}
