//! District entity.

use crate::{Entity, EntityId, EntityKind, Persistable, StorefrontResult};
use serde::{Deserialize, Serialize};

/// A country district (state, province) that cities belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    #[serde(default)]
    id: Option<EntityId>,
    name: String,
    abbreviation: String,
}

impl District {
    /// Creates a new, unpersisted district.
    #[must_use]
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            abbreviation: abbreviation.into(),
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
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn set_abbreviation(&mut self, abbreviation: impl Into<String>) {
        self.abbreviation = abbreviation.into();
    }
}

impl Entity for District {
    const KIND: EntityKind = EntityKind::District;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(mut self, id: Option<EntityId>) -> Self {
        self.id = id;
        self
    }
}

impl Persistable for District {
    fn assign_identity(&mut self, next_id: &mut dyn FnMut() -> StorefrontResult<EntityId>) -> StorefrontResult<()> {
        if self.id.is_none() {
            self.id = Some(next_id()?);
        }
        Ok(())
    }
}
