//! District and city DTOs.

use super::Dto;
use serde::{Deserialize, Serialize};
use storefront_core::rules::not_blank;
use storefront_core::EntityId;
use validator::Validate;

/// Transfer object for a district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDto {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[validate(custom(function = "not_blank", message = "Name must not be blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "Abbreviation must not be blank"))]
    pub abbreviation: String,
}

impl Dto for DistrictDto {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn clear_ids(&mut self) {
        self.id = None;
    }
}

/// Transfer object for a city. `districtId` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[validate(custom(function = "not_blank", message = "Name must not be blank"))]
    pub name: String,

    pub district_id: EntityId,
}

impl Dto for CityDto {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn clear_ids(&mut self) {
        self.id = None;
    }
}
