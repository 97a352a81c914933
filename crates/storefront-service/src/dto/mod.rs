//! Data Transfer Objects (DTOs).
//!
//! DTOs are the flat, wire-facing projection of the entities: relations are
//! carried as identifiers only. Field names serialize in camelCase
//! (`districtId`, `socialSecurityNumber`, `dateTime`, ...).

mod customer_dto;
mod location_dto;
mod product_dto;
mod purchase_dto;

pub use customer_dto::*;
pub use location_dto::*;
pub use product_dto::*;
pub use purchase_dto::*;

use serde::{de::DeserializeOwned, Serialize};
use storefront_core::EntityId;
use validator::Validate;

/// Behaviour shared by every transfer object.
pub trait Dto: Validate + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identifier of the projected entity, `None` if not yet persisted.
    fn id(&self) -> Option<EntityId>;

    /// Drops client-supplied identities before an insert.
    fn clear_ids(&mut self);
}
