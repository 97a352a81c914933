//! Purchase and purchase item DTOs.

use super::Dto;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::EntityId;
use validator::Validate;

/// Transfer object for a purchase. `customerId` is required.
///
/// `itens: null` (items not sent) and `itens: []` (no items) are different
/// payloads and stay different through mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDto {
    #[serde(default)]
    pub id: Option<EntityId>,

    pub customer_id: EntityId,

    #[serde(default)]
    pub date_time: Option<DateTime<Utc>>,

    #[serde(default)]
    #[validate(nested)]
    pub itens: Option<Vec<PurchaseItemDto>>,
}

impl Dto for PurchaseDto {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn clear_ids(&mut self) {
        self.id = None;
        for item in self.itens.iter_mut().flatten() {
            item.clear_ids();
        }
    }
}

/// Transfer object for a purchase line item.
///
/// For an item that already exists, `productId` and `quant` are ignored on
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItemDto {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[serde(default)]
    pub purchase_id: Option<EntityId>,

    pub product_id: EntityId,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quant: i32,
}

impl Dto for PurchaseItemDto {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn clear_ids(&mut self) {
        self.id = None;
        self.purchase_id = None;
    }
}
