use super::EntityRules;
use async_trait::async_trait;
use std::sync::Arc;
use storefront_config::InventoryConfig;
use storefront_core::{Entity, Purchase, Resolver, StorefrontError, StorefrontResult};
use tracing::debug;

/// Stock check for new purchases.
///
/// Every item of a purchase being inserted must reference a saved product
/// with at least `quant` units available. Updates are not checked.
pub struct PurchaseRules {
    resolver: Arc<dyn Resolver>,
    enforce_stock_check: bool,
}

impl PurchaseRules {
    pub fn new(resolver: Arc<dyn Resolver>, config: &InventoryConfig) -> Self {
        Self {
            resolver,
            enforce_stock_check: config.enforce_stock_check,
        }
    }
}

#[async_trait]
impl EntityRules<Purchase> for PurchaseRules {
    async fn before_save(&self, purchase: &Purchase) -> StorefrontResult<()> {
        if purchase.is_editing() || !self.enforce_stock_check {
            return Ok(());
        }

        for item in purchase.itens().into_iter().flatten() {
            let product_id = item
                .product()
                .and_then(Entity::id)
                .ok_or_else(|| StorefrontError::business_rule("Product not specified"))?;

            let product = self
                .resolver
                .product(product_id)
                .await?
                .ok_or_else(|| StorefrontError::not_found("Product", product_id))?;

            debug!(product_id = %product_id, available = product.amount(), requested = item.quant(), "Checking stock");
            if !product.is_inventory_enough(item.quant()) {
                return Err(StorefrontError::business_rule(format!(
                    "Product {} is out of stock.",
                    product.description()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storefront_core::{Customer, EntityId, Product, PurchaseItem, Repository};
    use storefront_repository::InMemoryStore;

    async fn setup(enforce: bool) -> (PurchaseRules, Customer, Product) {
        let store = InMemoryStore::new();
        let customer = store.customers().save(Customer::new("Ana", "123")).await.unwrap();
        let pen = store.products().save(Product::new("Pen", Decimal::ONE, 2)).await.unwrap();
        let rules = PurchaseRules::new(
            Arc::new(store),
            &InventoryConfig {
                enforce_stock_check: enforce,
            },
        );
        (rules, customer, pen)
    }

    #[tokio::test]
    async fn test_enough_stock() {
        let (rules, customer, pen) = setup(true).await;
        let purchase = Purchase::new(customer).with_itens(vec![PurchaseItem::new(pen, 2)]);
        assert!(rules.before_save(&purchase).await.is_ok());
    }

    #[tokio::test]
    async fn test_out_of_stock() {
        let (rules, customer, pen) = setup(true).await;
        let purchase = Purchase::new(customer).with_itens(vec![PurchaseItem::new(pen, 3)]);

        let err = rules.before_save(&purchase).await.unwrap_err();
        assert_eq!(err.to_string(), "Business rule violation: Product Pen is out of stock.");
    }

    #[tokio::test]
    async fn test_unsaved_product() {
        let (rules, customer, _) = setup(true).await;
        let purchase =
            Purchase::new(customer).with_itens(vec![PurchaseItem::new(Product::new("Ink", Decimal::ONE, 9), 1)]);

        let err = rules.before_save(&purchase).await.unwrap_err();
        assert!(matches!(err, StorefrontError::BusinessRule(ref msg) if msg == "Product not specified"));
    }

    #[tokio::test]
    async fn test_product_gone() {
        let (rules, customer, _) = setup(true).await;
        let ghost = Product::new("Ink", Decimal::ONE, 9).with_id(Some(EntityId(42)));
        let purchase = Purchase::new(customer).with_itens(vec![PurchaseItem::new(ghost, 1)]);

        let err = rules.before_save(&purchase).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_updates_and_disabled_checks_are_skipped() {
        let (rules, customer, pen) = setup(true).await;
        let editing = Purchase::new(customer.clone())
            .with_id(Some(EntityId(1)))
            .with_itens(vec![PurchaseItem::new(pen.clone(), 50)]);
        assert!(rules.before_save(&editing).await.is_ok());

        let (lenient, _, _) = setup(false).await;
        let inserting = Purchase::new(customer).with_itens(vec![PurchaseItem::new(pen, 50)]);
        assert!(lenient.before_save(&inserting).await.is_ok());
    }
}
