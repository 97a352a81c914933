use super::{still_referenced, EntityRules};
use async_trait::async_trait;
use std::sync::Arc;
use storefront_core::{Entity, EntityKind, Product, StorefrontError, StorefrontResult};
use storefront_repository::CatalogQueries;

/// A product cannot be deleted while in stock or while purchase items
/// reference it.
pub struct ProductRules {
    queries: Arc<dyn CatalogQueries>,
}

impl ProductRules {
    pub fn new(queries: Arc<dyn CatalogQueries>) -> Self {
        Self { queries }
    }
}

#[async_trait]
impl EntityRules<Product> for ProductRules {
    async fn before_delete(&self, product: &Product) -> StorefrontResult<()> {
        if product.has_inventory() {
            return Err(StorefrontError::business_rule(format!(
                "Product {} cannot be deleted while it has {} units in stock",
                product.description(),
                product.amount()
            )));
        }

        if let Some(id) = product.id() {
            if !self.queries.find_purchases_by_product_id(id).await?.is_empty() {
                return Err(still_referenced(EntityKind::Product, EntityKind::PurchaseItem));
            }
        }
        Ok(())
    }
}
