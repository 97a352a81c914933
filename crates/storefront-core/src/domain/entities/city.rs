//! City entity.

use super::District;
use crate::{Entity, EntityId, EntityKind, Persistable, StorefrontResult};
use serde::{Deserialize, Serialize};

/// A city somewhere in the world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(default)]
    id: Option<EntityId>,
    name: String,
    /// The country district where the city is. Required once persisted.
    #[serde(default)]
    district: Option<District>,
}

impl City {
    /// Creates a new, unpersisted city in the given district.
    #[must_use]
    pub fn new(name: impl Into<String>, district: District) -> Self {
        Self {
            id: None,
            name: name.into(),
            district: Some(district),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub const fn district(&self) -> Option<&District> {
        self.district.as_ref()
    }

    pub fn set_district(&mut self, district: Option<District>) {
        self.district = district;
    }
}

impl Entity for City {
    const KIND: EntityKind = EntityKind::City;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(mut self, id: Option<EntityId>) -> Self {
        self.id = id;
        self
    }
}

impl Persistable for City {
    fn assign_identity(&mut self, next_id: &mut dyn FnMut() -> StorefrontResult<EntityId>) -> StorefrontResult<()> {
        if self.id.is_none() {
            self.id = Some(next_id()?);
        }
        Ok(())
    }
}
