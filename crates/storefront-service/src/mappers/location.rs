//! District and city mappers.

use super::{required_id, resolved};
use crate::dto::{CityDto, DistrictDto};
use async_trait::async_trait;
use storefront_core::{City, District, Entity, EntityKind, Mapper, MappingError, Resolver, StorefrontResult};

/// Maps [`District`] to and from [`DistrictDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DistrictMapper;

#[async_trait]
impl Mapper<District, DistrictDto> for DistrictMapper {
    fn to_dto(&self, entity: &District) -> Result<DistrictDto, MappingError> {
        Ok(DistrictDto {
            id: entity.id(),
            name: entity.name().to_string(),
            abbreviation: entity.abbreviation().to_string(),
        })
    }

    async fn from_dto(&self, dto: DistrictDto, _resolver: &dyn Resolver) -> StorefrontResult<District> {
        Ok(District::new(dto.name, dto.abbreviation).with_id(dto.id))
    }
}

/// Maps [`City`] to and from [`CityDto`]. The district is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityMapper;

#[async_trait]
impl Mapper<City, CityDto> for CityMapper {
    fn to_dto(&self, entity: &City) -> Result<CityDto, MappingError> {
        Ok(CityDto {
            id: entity.id(),
            name: entity.name().to_string(),
            district_id: required_id(EntityKind::City, "district", entity.district())?,
        })
    }

    async fn from_dto(&self, dto: CityDto, resolver: &dyn Resolver) -> StorefrontResult<City> {
        let district = resolved(dto.district_id, resolver.district(dto.district_id).await?)?;
        Ok(City::new(dto.name, district).with_id(dto.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{EntityId, Repository, StorefrontError};
    use storefront_repository::InMemoryStore;

    async fn store_with_district() -> (InMemoryStore, District) {
        let store = InMemoryStore::new();
        let district = store.districts().save(District::new("Tocantins", "TO")).await.unwrap();
        (store, district)
    }

    #[tokio::test]
    async fn test_district_round_trip() {
        let (store, district) = store_with_district().await;
        let dto = DistrictMapper.to_dto(&district).unwrap();
        assert_eq!(dto.abbreviation, "TO");

        let back = DistrictMapper.from_dto(dto, &store).await.unwrap();
        assert_eq!(back, district);
    }

    #[tokio::test]
    async fn test_city_to_dto_flattens_district() {
        let (_, district) = store_with_district().await;
        let city = City::new("Palmas", district.clone()).with_id(Some(EntityId(7)));

        let dto = CityMapper.to_dto(&city).unwrap();
        assert_eq!(dto.id, Some(EntityId(7)));
        assert_eq!(dto.name, "Palmas");
        assert_eq!(Some(dto.district_id), district.id());
    }

    #[tokio::test]
    async fn test_city_from_dto_resolves_district() {
        let (store, district) = store_with_district().await;
        let dto = CityDto {
            id: None,
            name: "Palmas".to_string(),
            district_id: district.id().unwrap(),
        };

        let city = CityMapper.from_dto(dto, &store).await.unwrap();
        assert_eq!(city.district(), Some(&district));
        assert!(city.is_inserting());
    }

    #[tokio::test]
    async fn test_city_from_dto_unknown_district() {
        let store = InMemoryStore::new();
        let dto = CityDto {
            id: None,
            name: "Palmas".to_string(),
            district_id: EntityId(99),
        };

        let err = CityMapper.from_dto(dto, &store).await.unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Mapping(MappingError::UnresolvedReference {
                kind: EntityKind::District,
                id: EntityId(99)
            })
        ));
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_city_without_district_cannot_be_projected() {
        let mut city = City::new("Palmas", District::new("Tocantins", "TO"));
        city.set_district(None);

        let err = CityMapper.to_dto(&city).unwrap_err();
        assert!(matches!(err, MappingError::MissingRequiredRelation { relation: "district", .. }));
    }

    #[tokio::test]
    async fn test_city_update_keeps_identity() {
        let (store, district) = store_with_district().await;
        let existing = City::new("Palmas", district.clone()).with_id(Some(EntityId(7)));
        let dto = CityDto {
            id: Some(EntityId(8)),
            name: "Araguaína".to_string(),
            district_id: district.id().unwrap(),
        };

        let updated = CityMapper.apply_update(&existing, dto, &store).await.unwrap();
        assert_eq!(updated.id(), Some(EntityId(7)));
        assert_eq!(updated.name(), "Araguaína");
    }
}
