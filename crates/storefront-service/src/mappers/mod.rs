//! Entity/DTO mappers.
//!
//! Each mapper converts in both directions. Entity to DTO flattens relations
//! down to their identifiers; DTO to entity looks referenced entities up
//! through a [`Resolver`](storefront_core::Resolver).

mod customer;
mod location;
mod product;
mod purchase;

pub use customer::*;
pub use location::*;
pub use product::*;
pub use purchase::*;

use storefront_core::{Entity, EntityId, EntityKind, MappingError};

/// Identifier of a required relation, for entity to DTO projection.
pub(crate) fn required_id<R: Entity>(
    owner: EntityKind,
    relation: &'static str,
    related: Option<&R>,
) -> Result<EntityId, MappingError> {
    let related = related.ok_or(MappingError::MissingRequiredRelation { entity: owner, relation })?;
    related
        .id()
        .ok_or(MappingError::UnpersistedReference { entity: owner, relation })
}

/// Identifier of an optional relation. A present but unsaved relation is
/// still an error.
pub(crate) fn optional_id<R: Entity>(
    owner: EntityKind,
    relation: &'static str,
    related: Option<&R>,
) -> Result<Option<EntityId>, MappingError> {
    related
        .map(|r| r.id().ok_or(MappingError::UnpersistedReference { entity: owner, relation }))
        .transpose()
}

/// Unwraps a resolver lookup, failing when nothing exists under `id`.
pub(crate) fn resolved<R: Entity>(id: EntityId, found: Option<R>) -> Result<R, MappingError> {
    found.ok_or(MappingError::UnresolvedReference { kind: R::KIND, id })
}
