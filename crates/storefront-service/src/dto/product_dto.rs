//! Product DTO.

use super::Dto;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_core::rules::{non_negative, not_blank};
use storefront_core::EntityId;
use validator::Validate;

/// Transfer object for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[validate(custom(function = "not_blank", message = "Description must not be blank"))]
    pub description: String,

    #[validate(custom(function = "non_negative", message = "Price must not be negative"))]
    pub price: Decimal,

    #[validate(range(min = 0, message = "Amount must not be negative"))]
    pub amount: i32,
}

impl Dto for ProductDto {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn clear_ids(&mut self) {
        self.id = None;
    }
}
