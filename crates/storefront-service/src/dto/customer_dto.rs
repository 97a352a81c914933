//! Customer DTO.

use super::Dto;
use serde::{Deserialize, Serialize};
use storefront_core::rules::not_blank;
use storefront_core::EntityId;
use validator::Validate;

/// Transfer object for a customer. `cityId` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[validate(custom(function = "not_blank", message = "Name must not be blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "Social security number must not be blank"))]
    pub social_security_number: String,

    #[serde(default)]
    pub city_id: Option<EntityId>,
}

impl Dto for CustomerDto {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn clear_ids(&mut self) {
        self.id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_dto_wire_names() {
        let dto = CustomerDto {
            id: Some(EntityId(1)),
            name: "Ana".to_string(),
            social_security_number: "123".to_string(),
            city_id: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            json!({"id": 1, "name": "Ana", "socialSecurityNumber": "123", "cityId": null})
        );
    }

    #[test]
    fn test_customer_dto_city_id_optional() {
        let dto: CustomerDto =
            serde_json::from_value(json!({"name": "Ana", "socialSecurityNumber": "123"})).unwrap();
        assert_eq!(dto.city_id, None);
    }
}
