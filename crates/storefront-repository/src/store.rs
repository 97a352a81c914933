//! In-memory store holding one repository per aggregate.

use crate::{matches_like, CatalogQueries, InMemoryRepository};
use async_trait::async_trait;
use std::sync::Arc;
use storefront_core::{
    City, Customer, District, Entity, EntityId, Product, Purchase, Repository, Resolver,
    StorefrontResult,
};

/// A set of in-memory repositories that also resolves references between them.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    districts: Arc<InMemoryRepository<District>>,
    cities: Arc<InMemoryRepository<City>>,
    customers: Arc<InMemoryRepository<Customer>>,
    products: Arc<InMemoryRepository<Product>>,
    purchases: Arc<InMemoryRepository<Purchase>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn districts(&self) -> Arc<InMemoryRepository<District>> {
        Arc::clone(&self.districts)
    }

    #[must_use]
    pub fn cities(&self) -> Arc<InMemoryRepository<City>> {
        Arc::clone(&self.cities)
    }

    #[must_use]
    pub fn customers(&self) -> Arc<InMemoryRepository<Customer>> {
        Arc::clone(&self.customers)
    }

    #[must_use]
    pub fn products(&self) -> Arc<InMemoryRepository<Product>> {
        Arc::clone(&self.products)
    }

    #[must_use]
    pub fn purchases(&self) -> Arc<InMemoryRepository<Purchase>> {
        Arc::clone(&self.purchases)
    }
}

#[async_trait]
impl Resolver for InMemoryStore {
    async fn district(&self, id: EntityId) -> StorefrontResult<Option<District>> {
        self.districts.find_by_id(id).await
    }

    async fn city(&self, id: EntityId) -> StorefrontResult<Option<City>> {
        self.cities.find_by_id(id).await
    }

    async fn customer(&self, id: EntityId) -> StorefrontResult<Option<Customer>> {
        self.customers.find_by_id(id).await
    }

    async fn product(&self, id: EntityId) -> StorefrontResult<Option<Product>> {
        self.products.find_by_id(id).await
    }
}

#[async_trait]
impl CatalogQueries for InMemoryStore {
    async fn find_districts_by_name_like(&self, pattern: &str) -> StorefrontResult<Vec<District>> {
        Ok(self.districts.filter(|d| matches_like(pattern, d.name())))
    }

    async fn find_districts_by_name(&self, name: &str) -> StorefrontResult<Vec<District>> {
        Ok(self.districts.filter(|d| d.name() == name))
    }

    async fn find_districts_by_abbreviation(&self, abbreviation: &str) -> StorefrontResult<Vec<District>> {
        Ok(self.districts.filter(|d| d.abbreviation() == abbreviation))
    }

    async fn find_cities_by_name_like(&self, pattern: &str) -> StorefrontResult<Vec<City>> {
        Ok(self.cities.filter(|c| matches_like(pattern, c.name())))
    }

    async fn find_cities_by_name(&self, name: &str) -> StorefrontResult<Vec<City>> {
        Ok(self.cities.filter(|c| c.name() == name))
    }

    async fn find_cities_by_district_id(&self, district_id: EntityId) -> StorefrontResult<Vec<City>> {
        Ok(self
            .cities
            .filter(|c| c.district().and_then(Entity::id) == Some(district_id)))
    }

    async fn find_customer_by_social_security_number(&self, ssn: &str) -> StorefrontResult<Option<Customer>> {
        Ok(self
            .customers
            .filter(|c| c.social_security_number() == ssn)
            .into_iter()
            .next())
    }

    async fn find_customers_by_name_like(&self, pattern: &str) -> StorefrontResult<Vec<Customer>> {
        Ok(self.customers.filter(|c| matches_like(pattern, c.name())))
    }

    async fn find_customers_by_city_id(&self, city_id: EntityId) -> StorefrontResult<Vec<Customer>> {
        Ok(self
            .customers
            .filter(|c| c.city().and_then(Entity::id) == Some(city_id)))
    }

    async fn find_purchases_by_customer_id(&self, customer_id: EntityId) -> StorefrontResult<Vec<Purchase>> {
        Ok(self
            .purchases
            .filter(|p| p.customer().and_then(Entity::id) == Some(customer_id)))
    }

    async fn find_purchases_by_product_id(&self, product_id: EntityId) -> StorefrontResult<Vec<Purchase>> {
        Ok(self.purchases.filter(|p| {
            p.itens()
                .into_iter()
                .flatten()
                .any(|item| item.product().and_then(Entity::id) == Some(product_id))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storefront_core::PurchaseItem;

    #[tokio::test]
    async fn test_resolves_saved_entities() {
        let store = InMemoryStore::new();
        let district = store.districts().save(District::new("Tocantins", "TO")).await.unwrap();
        let city = store.cities().save(City::new("Palmas", district.clone())).await.unwrap();

        let resolved = store.city(city.id().unwrap()).await.unwrap().unwrap();
        assert_eq!(resolved, city);
        assert_eq!(store.district(district.id().unwrap()).await.unwrap(), Some(district));
    }

    #[tokio::test]
    async fn test_unknown_id_resolves_to_none() {
        let store = InMemoryStore::new();
        assert!(store.product(EntityId(99)).await.unwrap().is_none());
        assert!(store.customer(EntityId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let clone = store.clone();
        store.districts().save(District::new("Tocantins", "TO")).await.unwrap();
        assert_eq!(clone.districts().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_name_like_queries() {
        let store = InMemoryStore::new();
        let to = store.districts().save(District::new("Tocantins", "TO")).await.unwrap();
        store.districts().save(District::new("Goias", "GO")).await.unwrap();
        store.cities().save(City::new("Palmas", to.clone())).await.unwrap();
        store.cities().save(City::new("Porto Nacional", to)).await.unwrap();

        let found = store.find_districts_by_name_like("Toc%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].abbreviation(), "TO");
        assert_eq!(store.find_cities_by_name_like("P%").await.unwrap().len(), 2);
        assert!(store.find_cities_by_name_like("p%").await.unwrap().is_empty());
        assert_eq!(store.find_districts_by_abbreviation("GO").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_customer_queries() {
        let store = InMemoryStore::new();
        let district = store.districts().save(District::new("Tocantins", "TO")).await.unwrap();
        let palmas = store.cities().save(City::new("Palmas", district)).await.unwrap();
        let ana = store
            .customers()
            .save(Customer::new("Ana Souza", "123.456.789-00").with_city(palmas.clone()))
            .await
            .unwrap();
        store.customers().save(Customer::new("Bruno", "987.654.321-00")).await.unwrap();

        let by_ssn = store.find_customer_by_social_security_number("123.456.789-00").await.unwrap();
        assert_eq!(by_ssn, Some(ana.clone()));
        assert!(store.find_customer_by_social_security_number("000").await.unwrap().is_none());
        assert_eq!(store.find_customers_by_name_like("%Souza").await.unwrap(), vec![ana.clone()]);
        assert_eq!(store.find_customers_by_city_id(palmas.id().unwrap()).await.unwrap(), vec![ana]);
    }

    #[tokio::test]
    async fn test_reference_queries() {
        let store = InMemoryStore::new();
        let district = store.districts().save(District::new("Tocantins", "TO")).await.unwrap();
        let city = store.cities().save(City::new("Palmas", district.clone())).await.unwrap();
        let customer = store.customers().save(Customer::new("Ana", "1")).await.unwrap();
        let pen = store.products().save(Product::new("Pen", Decimal::new(250, 2), 10)).await.unwrap();
        let ink = store.products().save(Product::new("Ink", Decimal::new(900, 2), 2)).await.unwrap();
        let purchase = store
            .purchases()
            .save(Purchase::new(customer.clone()).with_itens(vec![PurchaseItem::new(pen.clone(), 1)]))
            .await
            .unwrap();

        assert_eq!(store.find_cities_by_district_id(district.id().unwrap()).await.unwrap(), vec![city]);
        assert_eq!(
            store.find_purchases_by_customer_id(customer.id().unwrap()).await.unwrap(),
            vec![purchase.clone()]
        );
        assert_eq!(store.find_purchases_by_product_id(pen.id().unwrap()).await.unwrap(), vec![purchase]);
        assert!(store.find_purchases_by_product_id(ink.id().unwrap()).await.unwrap().is_empty());
    }
}
