//! Wiring of the per-entity CRUD services.

use crate::crud_service::CrudService;
use crate::dto::{CityDto, CustomerDto, DistrictDto, ProductDto, PurchaseDto};
use crate::mappers::{CityMapper, CustomerMapper, DistrictMapper, ProductMapper, PurchaseMapper};
use crate::r#impl::CrudServiceImpl;
use crate::rules::{CityRules, CustomerRules, DistrictRules, ProductRules, PurchaseRules};
use std::sync::Arc;
use storefront_config::AppConfig;
use storefront_core::{City, Customer, District, Product, Purchase, Resolver};
use storefront_repository::{CatalogQueries, InMemoryStore};
use tracing::info;

pub type DistrictService = dyn CrudService<District, DistrictDto>;
pub type CityService = dyn CrudService<City, CityDto>;
pub type CustomerService = dyn CrudService<Customer, CustomerDto>;
pub type ProductService = dyn CrudService<Product, ProductDto>;
pub type PurchaseService = dyn CrudService<Purchase, PurchaseDto>;

/// One CRUD service per aggregate, sharing a single store.
#[derive(Clone)]
pub struct StorefrontServices {
    pub districts: Arc<DistrictService>,
    pub cities: Arc<CityService>,
    pub customers: Arc<CustomerService>,
    pub products: Arc<ProductService>,
    pub purchases: Arc<PurchaseService>,
}

impl StorefrontServices {
    /// Builds the services on top of an in-memory store.
    #[must_use]
    pub fn in_memory(store: &InMemoryStore, config: &AppConfig) -> Self {
        let resolver: Arc<dyn Resolver> = Arc::new(store.clone());
        let queries: Arc<dyn CatalogQueries> = Arc::new(store.clone());

        info!(
            enforce_stock_check = config.inventory.enforce_stock_check,
            warn_on_ignored_changes = config.mapping.warn_on_ignored_changes,
            "Building storefront services"
        );

        Self {
            districts: Arc::new(
                CrudServiceImpl::<_, DistrictDto, _, _>::new(store.districts(), Arc::clone(&resolver), DistrictMapper)
                    .with_rules(Arc::new(DistrictRules::new(Arc::clone(&queries)))),
            ),
            cities: Arc::new(
                CrudServiceImpl::<_, CityDto, _, _>::new(store.cities(), Arc::clone(&resolver), CityMapper)
                    .with_rules(Arc::new(CityRules::new(Arc::clone(&queries)))),
            ),
            customers: Arc::new(
                CrudServiceImpl::<_, CustomerDto, _, _>::new(store.customers(), Arc::clone(&resolver), CustomerMapper)
                    .with_rules(Arc::new(CustomerRules::new(Arc::clone(&queries)))),
            ),
            products: Arc::new(
                CrudServiceImpl::<_, ProductDto, _, _>::new(store.products(), Arc::clone(&resolver), ProductMapper)
                    .with_rules(Arc::new(ProductRules::new(Arc::clone(&queries)))),
            ),
            purchases: Arc::new(
                CrudServiceImpl::<_, PurchaseDto, _, _>::new(
                    store.purchases(),
                    Arc::clone(&resolver),
                    PurchaseMapper::from_config(&config.mapping),
                )
                .with_rules(Arc::new(PurchaseRules::new(Arc::clone(&resolver), &config.inventory))),
            ),
        }
    }
}
