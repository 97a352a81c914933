use super::{still_referenced, EntityRules};
use async_trait::async_trait;
use std::sync::Arc;
use storefront_core::{Customer, Entity, EntityKind, StorefrontResult};
use storefront_repository::CatalogQueries;

/// A customer with purchases cannot be deleted.
pub struct CustomerRules {
    queries: Arc<dyn CatalogQueries>,
}

impl CustomerRules {
    pub fn new(queries: Arc<dyn CatalogQueries>) -> Self {
        Self { queries }
    }
}

#[async_trait]
impl EntityRules<Customer> for CustomerRules {
    async fn before_delete(&self, customer: &Customer) -> StorefrontResult<()> {
        let Some(id) = customer.id() else {
            return Ok(());
        };

        if !self.queries.find_purchases_by_customer_id(id).await?.is_empty() {
            return Err(still_referenced(EntityKind::Customer, EntityKind::Purchase));
        }
        Ok(())
    }
}
