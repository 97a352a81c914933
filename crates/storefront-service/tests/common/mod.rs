//! Common fixtures for service integration tests.

#![allow(dead_code)]

use rust_decimal::Decimal;
use storefront_config::AppConfig;
use storefront_core::EntityId;
use storefront_repository::InMemoryStore;
use storefront_service::{CityDto, CrudService, CustomerDto, DistrictDto, ProductDto, StorefrontServices};

/// Services over a fresh store, with a district, a city, a customer and two
/// products saved.
pub struct TestCatalog {
    pub store: InMemoryStore,
    pub services: StorefrontServices,
    pub district_id: EntityId,
    pub city_id: EntityId,
    pub customer_id: EntityId,
    pub pen_id: EntityId,
    pub ink_id: EntityId,
}

impl TestCatalog {
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let store = InMemoryStore::new();
        let services = StorefrontServices::in_memory(&store, &config);

        let district = services
            .districts
            .insert(DistrictDto {
                id: None,
                name: "Tocantins".to_string(),
                abbreviation: "TO".to_string(),
            })
            .await
            .expect("Failed to insert district");

        let city = services
            .cities
            .insert(CityDto {
                id: None,
                name: "Palmas".to_string(),
                district_id: district.id.expect("district id"),
            })
            .await
            .expect("Failed to insert city");

        let customer = services
            .customers
            .insert(CustomerDto {
                id: None,
                name: "Ana".to_string(),
                social_security_number: "123.456.789-00".to_string(),
                city_id: city.id,
            })
            .await
            .expect("Failed to insert customer");

        let pen = services
            .products
            .insert(product("Pen", Decimal::new(250, 2), 10))
            .await
            .expect("Failed to insert pen");
        let ink = services
            .products
            .insert(product("Ink", Decimal::new(900, 2), 2))
            .await
            .expect("Failed to insert ink");

        Self {
            store,
            services,
            district_id: district.id.expect("district id"),
            city_id: city.id.expect("city id"),
            customer_id: customer.id.expect("customer id"),
            pen_id: pen.id.expect("pen id"),
            ink_id: ink.id.expect("ink id"),
        }
    }
}

pub fn product(description: &str, price: Decimal, amount: i32) -> ProductDto {
    ProductDto {
        id: None,
        description: description.to_string(),
        price,
        amount,
    }
}
