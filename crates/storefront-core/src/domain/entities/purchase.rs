//! Purchase and purchase item entities.

use super::{Customer, Product};
use crate::{Entity, EntityId, EntityKind, Persistable, StorefrontResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchase made by a [`Customer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(default)]
    id: Option<EntityId>,
    /// Required once persisted.
    #[serde(default)]
    customer: Option<Customer>,
    #[serde(default)]
    date_time: Option<DateTime<Utc>>,
    /// Line items in receipt order. `None` means "not loaded", which is not
    /// the same as an empty purchase.
    #[serde(default)]
    itens: Option<Vec<PurchaseItem>>,
}

impl Purchase {
    /// Creates a new, unpersisted purchase for a customer, without items.
    #[must_use]
    pub fn new(customer: Customer) -> Self {
        Self {
            id: None,
            customer: Some(customer),
            date_time: None,
            itens: None,
        }
    }

    #[must_use]
    pub fn with_date_time(mut self, date_time: DateTime<Utc>) -> Self {
        self.date_time = Some(date_time);
        self
    }

    #[must_use]
    pub fn with_itens(mut self, itens: Vec<PurchaseItem>) -> Self {
        self.set_itens(Some(itens));
        self
    }

    #[must_use]
    pub const fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn set_customer(&mut self, customer: Option<Customer>) {
        self.customer = customer;
    }

    #[must_use]
    pub const fn date_time(&self) -> Option<DateTime<Utc>> {
        self.date_time
    }

    pub fn set_date_time(&mut self, date_time: Option<DateTime<Utc>>) {
        self.date_time = date_time;
    }

    #[must_use]
    pub fn itens(&self) -> Option<&[PurchaseItem]> {
        self.itens.as_deref()
    }

    /// Replaces the line items. Items are linked to this purchase when it
    /// already has an identity.
    pub fn set_itens(&mut self, itens: Option<Vec<PurchaseItem>>) {
        self.itens = itens.map(|items| {
            items
                .into_iter()
                .map(|item| match self.id {
                    Some(id) => item.with_purchase_id(Some(id)),
                    None => item,
                })
                .collect()
        });
    }

    /// Appends a line item, creating the item list if it was absent.
    pub fn add_item(&mut self, item: PurchaseItem) {
        let item = match self.id {
            Some(id) => item.with_purchase_id(Some(id)),
            None => item,
        };
        self.itens.get_or_insert_with(Vec::new).push(item);
    }
}

impl Entity for Purchase {
    const KIND: EntityKind = EntityKind::Purchase;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(mut self, id: Option<EntityId>) -> Self {
        self.id = id;
        self
    }
}

impl Persistable for Purchase {
    fn assign_identity(&mut self, next_id: &mut dyn FnMut() -> StorefrontResult<EntityId>) -> StorefrontResult<()> {
        let id = match self.id {
            Some(id) => id,
            None => {
                let id = next_id()?;
                self.id = Some(id);
                id
            }
        };
        for item in self.itens.iter_mut().flatten() {
            item.assign_identity(&mut *next_id)?;
            item.purchase_id = Some(id);
        }
        Ok(())
    }
}

/// A line item of a [`Purchase`].
///
/// `product` and `quant` are fixed when the item is created: there are no
/// setters for them, and updates of a persisted item keep the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    #[serde(default)]
    id: Option<EntityId>,
    /// Owning purchase. Not part of the item's own JSON.
    #[serde(skip)]
    purchase_id: Option<EntityId>,
    /// Product being sold. Required once persisted.
    #[serde(default)]
    product: Option<Product>,
    /// Quantity of product items sold.
    quant: i32,
}

impl PurchaseItem {
    /// Creates a new, unpersisted line item.
    #[must_use]
    pub fn new(product: Product, quant: i32) -> Self {
        Self {
            id: None,
            purchase_id: None,
            product: Some(product),
            quant,
        }
    }

    #[must_use]
    pub fn with_purchase_id(mut self, purchase_id: Option<EntityId>) -> Self {
        self.purchase_id = purchase_id;
        self
    }

    #[must_use]
    pub const fn purchase_id(&self) -> Option<EntityId> {
        self.purchase_id
    }

    #[must_use]
    pub const fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    #[must_use]
    pub const fn quant(&self) -> i32 {
        self.quant
    }
}

impl Entity for PurchaseItem {
    const KIND: EntityKind = EntityKind::PurchaseItem;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(mut self, id: Option<EntityId>) -> Self {
        self.id = id;
        self
    }
}

impl Persistable for PurchaseItem {
    fn assign_identity(&mut self, next_id: &mut dyn FnMut() -> StorefrontResult<EntityId>) -> StorefrontResult<()> {
        if self.id.is_none() {
            self.id = Some(next_id()?);
        }
        Ok(())
    }
}
