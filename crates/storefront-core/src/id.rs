//! Numeric identity shared by all persisted entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Identifier assigned to an entity by the persistence layer.
///
/// An entity without an `EntityId` has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl EntityId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// The kinds of entity known to the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    City,
    Customer,
    District,
    Product,
    Purchase,
    PurchaseItem,
}

impl EntityKind {
    /// Returns the entity name as shown in messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Customer => "Customer",
            Self::District => "District",
            Self::Product => "Product",
            Self::Purchase => "Purchase",
            Self::PurchaseItem => "PurchaseItem",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId::new(42).to_string(), "42");
    }

    #[test]
    fn test_entity_id_serializes_as_number() {
        let json = serde_json::to_string(&EntityId::new(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: EntityId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, EntityId(7));
    }

    #[test]
    fn test_entity_kind_names() {
        assert_eq!(EntityKind::PurchaseItem.to_string(), "PurchaseItem");
        assert_eq!(EntityKind::District.as_str(), "District");
    }
}
