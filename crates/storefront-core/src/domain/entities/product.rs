//! Product entity.

use crate::{Entity, EntityId, EntityKind, Persistable, StorefrontResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product that can be sold in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    id: Option<EntityId>,
    description: String,
    /// Unit price, kept exact.
    price: Decimal,
    /// Units in stock.
    amount: i32,
}

impl Product {
    /// Creates a new, unpersisted product.
    #[must_use]
    pub fn new(description: impl Into<String>, price: Decimal, amount: i32) -> Self {
        Self {
            id: None,
            description: description.into(),
            price,
            amount,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    #[must_use]
    pub const fn amount(&self) -> i32 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: i32) {
        self.amount = amount;
    }

    /// Checks if there is any unit left in stock.
    #[must_use]
    pub const fn has_inventory(&self) -> bool {
        self.amount > 0
    }

    /// Checks if the stock covers the requested quantity.
    #[must_use]
    pub const fn is_inventory_enough(&self, quant: i32) -> bool {
        self.amount >= quant
    }
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(mut self, id: Option<EntityId>) -> Self {
        self.id = id;
        self
    }
}

impl Persistable for Product {
    fn assign_identity(&mut self, next_id: &mut dyn FnMut() -> StorefrontResult<EntityId>) -> StorefrontResult<()> {
        if self.id.is_none() {
            self.id = Some(next_id()?);
        }
        Ok(())
    }
}
