//! Finder queries beyond plain CRUD.

use async_trait::async_trait;
use storefront_core::{City, Customer, District, EntityId, Interface, Purchase, StorefrontResult};

/// Search and reference queries over the stored aggregates.
///
/// `*_like` methods take SQL `LIKE` patterns: `%` matches any run of
/// characters and `_` exactly one. Matching is case-sensitive.
#[async_trait]
pub trait CatalogQueries: Interface + Send + Sync {
    /// Districts whose name matches `pattern`.
    async fn find_districts_by_name_like(&self, pattern: &str) -> StorefrontResult<Vec<District>>;

    /// Districts named exactly `name`.
    async fn find_districts_by_name(&self, name: &str) -> StorefrontResult<Vec<District>>;

    /// Districts abbreviated exactly `abbreviation`.
    async fn find_districts_by_abbreviation(&self, abbreviation: &str) -> StorefrontResult<Vec<District>>;

    /// Cities whose name matches `pattern`.
    async fn find_cities_by_name_like(&self, pattern: &str) -> StorefrontResult<Vec<City>>;

    /// Cities named exactly `name`.
    async fn find_cities_by_name(&self, name: &str) -> StorefrontResult<Vec<City>>;

    /// Cities belonging to a district.
    async fn find_cities_by_district_id(&self, district_id: EntityId) -> StorefrontResult<Vec<City>>;

    async fn find_customer_by_social_security_number(&self, ssn: &str) -> StorefrontResult<Option<Customer>>;

    /// Customers whose name matches `pattern`.
    async fn find_customers_by_name_like(&self, pattern: &str) -> StorefrontResult<Vec<Customer>>;

    /// Customers living in a city.
    async fn find_customers_by_city_id(&self, city_id: EntityId) -> StorefrontResult<Vec<Customer>>;

    /// Purchases made by a customer.
    async fn find_purchases_by_customer_id(&self, customer_id: EntityId) -> StorefrontResult<Vec<Purchase>>;

    /// Purchases with at least one item of a product.
    async fn find_purchases_by_product_id(&self, product_id: EntityId) -> StorefrontResult<Vec<Purchase>>;
}

/// Matches `value` against a SQL `LIKE` pattern.
#[must_use]
pub fn matches_like(pattern: &str, value: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let value: Vec<char> = value.chars().collect();

    let (mut p, mut v) = (0, 0);
    // last `%` seen, with the value position it currently absorbs up to
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        match pattern.get(p) {
            Some('%') => {
                backtrack = Some((p, v));
                p += 1;
            }
            Some('_') => {
                p += 1;
                v += 1;
            }
            Some(&c) if c == value[v] => {
                p += 1;
                v += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    backtrack = Some((star, absorbed + 1));
                    p = star + 1;
                    v = absorbed + 1;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '%')
}
