use crate::dto::ProductDto;
use async_trait::async_trait;
use storefront_core::{Entity, Mapper, MappingError, Product, Resolver, StorefrontResult};

/// Maps [`Product`] to and from [`ProductDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMapper;

#[async_trait]
impl Mapper<Product, ProductDto> for ProductMapper {
    fn to_dto(&self, entity: &Product) -> Result<ProductDto, MappingError> {
        Ok(ProductDto {
            id: entity.id(),
            description: entity.description().to_string(),
            price: entity.price(),
            amount: entity.amount(),
        })
    }

    async fn from_dto(&self, dto: ProductDto, _resolver: &dyn Resolver) -> StorefrontResult<Product> {
        Ok(Product::new(dto.description, dto.price, dto.amount).with_id(dto.id))
    }
}
