use super::{optional_id, resolved};
use crate::dto::CustomerDto;
use async_trait::async_trait;
use storefront_core::{Customer, Entity, EntityKind, Mapper, MappingError, Resolver, StorefrontResult};

/// Maps [`Customer`] to and from [`CustomerDto`]. The city is optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerMapper;

#[async_trait]
impl Mapper<Customer, CustomerDto> for CustomerMapper {
    fn to_dto(&self, entity: &Customer) -> Result<CustomerDto, MappingError> {
        Ok(CustomerDto {
            id: entity.id(),
            name: entity.name().to_string(),
            social_security_number: entity.social_security_number().to_string(),
            city_id: optional_id(EntityKind::Customer, "city", entity.city())?,
        })
    }

    async fn from_dto(&self, dto: CustomerDto, resolver: &dyn Resolver) -> StorefrontResult<Customer> {
        let city = match dto.city_id {
            Some(city_id) => Some(resolved(city_id, resolver.city(city_id).await?)?),
            None => None,
        };

        let mut customer = Customer::new(dto.name, dto.social_security_number).with_id(dto.id);
        customer.set_city(city);
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{City, District, EntityId, Repository, StorefrontError};
    use storefront_repository::InMemoryStore;

    #[tokio::test]
    async fn test_customer_without_city() {
        let store = InMemoryStore::new();
        let customer = Customer::new("Ana", "123").with_id(Some(EntityId(1)));

        let dto = CustomerMapper.to_dto(&customer).unwrap();
        assert_eq!(dto.city_id, None);
        assert_eq!(dto.social_security_number, "123");

        let back = CustomerMapper.from_dto(dto, &store).await.unwrap();
        assert_eq!(back, customer);
    }

    #[tokio::test]
    async fn test_customer_with_city() {
        let store = InMemoryStore::new();
        let district = store.districts().save(District::new("Tocantins", "TO")).await.unwrap();
        let city = store.cities().save(City::new("Palmas", district)).await.unwrap();
        let customer = Customer::new("Ana", "123").with_city(city.clone());

        let dto = CustomerMapper.to_dto(&customer).unwrap();
        assert_eq!(dto.city_id, city.id());

        let back = CustomerMapper.from_dto(dto, &store).await.unwrap();
        assert_eq!(back.city(), Some(&city));
    }

    #[tokio::test]
    async fn test_customer_unknown_city() {
        let store = InMemoryStore::new();
        let dto = CustomerDto {
            id: None,
            name: "Ana".to_string(),
            social_security_number: "123".to_string(),
            city_id: Some(EntityId(5)),
        };

        let err = CustomerMapper.from_dto(dto, &store).await.unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Mapping(MappingError::UnresolvedReference { kind: EntityKind::City, .. })
        ));
    }

    #[test]
    fn test_customer_with_unsaved_city() {
        let city = City::new("Palmas", District::new("Tocantins", "TO"));
        let customer = Customer::new("Ana", "123").with_city(city);

        let err = CustomerMapper.to_dto(&customer).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnpersistedReference {
                entity: EntityKind::Customer,
                relation: "city"
            }
        );
    }
}
