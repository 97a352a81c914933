//! Customer entity.

use super::City;
use crate::{Entity, EntityId, EntityKind, Persistable, StorefrontResult};
use serde::{Deserialize, Serialize};

/// A customer of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    id: Option<EntityId>,
    name: String,
    social_security_number: String,
    /// The city where the customer lives, if known.
    #[serde(default)]
    city: Option<City>,
}

impl Customer {
    /// Creates a new, unpersisted customer with no known city.
    #[must_use]
    pub fn new(name: impl Into<String>, social_security_number: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            social_security_number: social_security_number.into(),
            city: None,
        }
    }

    /// Sets the city where the customer lives.
    #[must_use]
    pub fn with_city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn social_security_number(&self) -> &str {
        &self.social_security_number
    }

    pub fn set_social_security_number(&mut self, ssn: impl Into<String>) {
        self.social_security_number = ssn.into();
    }

    #[must_use]
    pub const fn city(&self) -> Option<&City> {
        self.city.as_ref()
    }

    pub fn set_city(&mut self, city: Option<City>) {
        self.city = city;
    }
}

impl Entity for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(mut self, id: Option<EntityId>) -> Self {
        self.id = id;
        self
    }
}

impl Persistable for Customer {
    fn assign_identity(&mut self, next_id: &mut dyn FnMut() -> StorefrontResult<EntityId>) -> StorefrontResult<()> {
        if self.id.is_none() {
            self.id = Some(next_id()?);
        }
        Ok(())
    }
}
