use super::{duplicate_value, still_referenced, taken_by_other, EntityRules};
use async_trait::async_trait;
use std::sync::Arc;
use storefront_core::{City, Entity, EntityKind, StorefrontResult};
use storefront_repository::CatalogQueries;

/// City names are unique, and a city with customers cannot be deleted.
pub struct CityRules {
    queries: Arc<dyn CatalogQueries>,
}

impl CityRules {
    pub fn new(queries: Arc<dyn CatalogQueries>) -> Self {
        Self { queries }
    }
}

#[async_trait]
impl EntityRules<City> for CityRules {
    async fn before_save(&self, city: &City) -> StorefrontResult<()> {
        let same_name = self.queries.find_cities_by_name(city.name()).await?;
        if taken_by_other(city, &same_name) {
            return Err(duplicate_value(EntityKind::City, "name"));
        }
        Ok(())
    }

    async fn before_delete(&self, city: &City) -> StorefrontResult<()> {
        let Some(id) = city.id() else {
            return Ok(());
        };

        if !self.queries.find_customers_by_city_id(id).await?.is_empty() {
            return Err(still_referenced(EntityKind::City, EntityKind::Customer));
        }
        Ok(())
    }
}
