use super::{duplicate_value, still_referenced, taken_by_other, EntityRules};
use async_trait::async_trait;
use std::sync::Arc;
use storefront_core::{District, Entity, EntityKind, StorefrontError, StorefrontResult};
use storefront_repository::CatalogQueries;
use tracing::debug;

/// Rules for districts.
///
/// Name and abbreviation must differ ignoring case, and each must be unique
/// across districts. A district with cities cannot be deleted.
pub struct DistrictRules {
    queries: Arc<dyn CatalogQueries>,
}

impl DistrictRules {
    pub fn new(queries: Arc<dyn CatalogQueries>) -> Self {
        Self { queries }
    }
}

#[async_trait]
impl EntityRules<District> for DistrictRules {
    async fn before_save(&self, district: &District) -> StorefrontResult<()> {
        if district.name().to_lowercase() == district.abbreviation().to_lowercase() {
            return Err(StorefrontError::business_rule(
                "The district name must be different from its abbreviation",
            ));
        }

        let same_name = self.queries.find_districts_by_name(district.name()).await?;
        if taken_by_other(district, &same_name) {
            return Err(duplicate_value(EntityKind::District, "name"));
        }

        let same_abbreviation = self
            .queries
            .find_districts_by_abbreviation(district.abbreviation())
            .await?;
        if taken_by_other(district, &same_abbreviation) {
            return Err(duplicate_value(EntityKind::District, "abbreviation"));
        }
        Ok(())
    }

    async fn before_delete(&self, district: &District) -> StorefrontResult<()> {
        let Some(id) = district.id() else {
            return Ok(());
        };

        let cities = self.queries.find_cities_by_district_id(id).await?;
        if !cities.is_empty() {
            debug!(district_id = %id, cities = cities.len(), "District still referenced");
            return Err(still_referenced(EntityKind::District, EntityKind::City));
        }
        Ok(())
    }
}
