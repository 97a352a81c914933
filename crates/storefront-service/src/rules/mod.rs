//! Business rules checked by the CRUD services before writes.

mod city_rules;
mod customer_rules;
mod district_rules;
mod product_rules;
mod purchase_rules;

pub use city_rules::CityRules;
pub use customer_rules::CustomerRules;
pub use district_rules::DistrictRules;
pub use product_rules::ProductRules;
pub use purchase_rules::PurchaseRules;

use async_trait::async_trait;
use storefront_core::{Entity, EntityKind, Interface, StorefrontError, StorefrontResult};

/// Hooks run by a [`CrudService`](crate::CrudService) around persistence.
///
/// A failing hook aborts the write with the returned error.
#[async_trait]
pub trait EntityRules<E: Entity>: Interface + Send + Sync {
    /// Runs before an insert or an update is saved.
    async fn before_save(&self, _entity: &E) -> StorefrontResult<()> {
        Ok(())
    }

    /// Runs before an existing entity is deleted.
    async fn before_delete(&self, _entity: &E) -> StorefrontResult<()> {
        Ok(())
    }
}

/// Rules for entities without any.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRules;

impl<E: Entity> EntityRules<E> for NoRules {}

/// Another saved entity already holds the same value for a unique field.
fn duplicate_value(kind: EntityKind, field: &str) -> StorefrontError {
    StorefrontError::conflict(format!("There is already a {kind} with the same value of {field}"))
}

/// The entity is still referenced and cannot be deleted.
fn still_referenced(target: EntityKind, source: EntityKind) -> StorefrontError {
    StorefrontError::conflict(format!(
        "It was not possible to delete {target} because there is a {source} associated with it"
    ))
}

/// Whether `others` holds an entity other than `entity` itself.
fn taken_by_other<E: Entity>(entity: &E, others: &[E]) -> bool {
    others.iter().any(|other| other.id() != entity.id())
}
