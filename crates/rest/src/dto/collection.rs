//! Collection and collectable DTOs.

use recollectable_persistence::core::ResourceStorage;
use recollectable_persistence::entities::{
    Banknote, Coin, Collectable, Collection, CollectionCollectable, Condition, User,
};
use recollectable_persistence::specification::Specification;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::input::{EntityInput, missing, reference, required};
use super::{CollectorValueDto, ConditionDto, CountryDto};
use crate::error::{RestError, RestResult};
use crate::responses::shaping::FieldSchema;

/// A collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollectionDto {
    pub id: Uuid,
    #[serde(rename = "Type")]
    pub collection_type: String,
    pub description: String,
    pub user_id: Uuid,
}

impl FieldSchema for CollectionDto {
    const FIELDS: &'static [&'static str] = &["Id", "Type", "Description", "UserId"];
}

impl From<&Collection> for CollectionDto {
    fn from(collection: &Collection) -> Self {
        Self {
            id: collection.id,
            collection_type: collection.collection_type.clone(),
            description: collection.description.clone(),
            user_id: collection.user_id,
        }
    }
}

/// A collectable as it sits in a collection.
///
/// The id is the placement's id; `CollectableId` points at the coin or
/// banknote itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollectableDto {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub collectable_id: Uuid,
    #[serde(rename = "Type")]
    pub collectable_type: String,
    pub release_date: String,
    pub country: CountryDto,
    pub collector_value: CollectorValueDto,
    pub condition: ConditionDto,
}

impl FieldSchema for CollectableDto {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "CollectionId",
        "CollectableId",
        "Type",
        "ReleaseDate",
        "Country",
        "CollectorValue",
        "Condition",
    ];
}

impl From<&CollectionCollectable> for CollectableDto {
    fn from(item: &CollectionCollectable) -> Self {
        Self {
            id: item.id,
            collection_id: item.collection_id,
            collectable_id: item.collectable.id,
            collectable_type: item.collectable.collectable_type.clone(),
            release_date: item.collectable.release_date.clone(),
            country: CountryDto::from(&item.collectable.country),
            collector_value: CollectorValueDto::from(&item.collectable.collector_value),
            condition: ConditionDto::from(&item.condition),
        }
    }
}

/// Body that creates or replaces a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CollectionInput {
    #[serde(rename = "Type")]
    pub collection_type: String,
    pub description: String,
    pub user_id: Uuid,
}

impl EntityInput for CollectionInput {
    type Entity = Collection;

    fn from_entity(collection: &Collection) -> Self {
        Self {
            collection_type: collection.collection_type.clone(),
            description: collection.description.clone(),
            user_id: collection.user_id,
        }
    }

    async fn into_entity<S: ResourceStorage>(
        self,
        storage: &S,
        id: Uuid,
    ) -> RestResult<Collection> {
        required("Type", &self.collection_type)?;
        let owner: User = reference(storage, "UserId", self.user_id).await?;
        Ok(Collection {
            id,
            collection_type: self.collection_type,
            description: self.description,
            user_id: owner.id,
        })
    }
}

/// Body that places a coin or banknote in a collection, or moves it.
///
/// `CollectionId` defaults to the collection in the request path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CollectableInput {
    pub collection_id: Option<Uuid>,
    pub collectable_id: Uuid,
    pub condition_id: Uuid,
}

/// Looks `id` up among coins, then banknotes.
async fn catalogue_item<S: ResourceStorage>(storage: &S, id: Uuid) -> RestResult<Collectable> {
    if let Some(coin) = storage.find(&Specification::<Coin>::by_id(id)).await? {
        return Ok(Collectable::from(&coin));
    }
    if let Some(banknote) = storage.find(&Specification::<Banknote>::by_id(id)).await? {
        return Ok(Collectable::from(&banknote));
    }
    Err(RestError::BadRequest {
        message: format!("CollectableId '{}' names neither a coin nor a banknote", id),
    })
}

impl EntityInput for CollectableInput {
    type Entity = CollectionCollectable;

    fn from_entity(item: &CollectionCollectable) -> Self {
        Self {
            collection_id: Some(item.collection_id),
            collectable_id: item.collectable.id,
            condition_id: item.condition.id,
        }
    }

    async fn into_entity<S: ResourceStorage>(
        self,
        storage: &S,
        id: Uuid,
    ) -> RestResult<CollectionCollectable> {
        let collection_id = self.collection_id.ok_or_else(|| missing("CollectionId"))?;
        let collection: Collection = reference(storage, "CollectionId", collection_id).await?;
        let collectable = catalogue_item(storage, self.collectable_id).await?;
        let condition: Condition = reference(storage, "ConditionId", self.condition_id).await?;

        Ok(CollectionCollectable {
            id,
            collection_id: collection.id,
            collectable,
            condition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::schema_check::assert_schema_matches;

    #[test]
    fn test_schemas_match_serialized_keys() {
        assert_schema_matches(&CollectionDto::from(&Collection::default()));
        assert_schema_matches(&CollectableDto::from(&CollectionCollectable::default()));
    }

    #[tokio::test]
    async fn test_collectable_input_resolves_banknotes() {
        use recollectable_persistence::backends::memory::{InMemoryBackend, seed};

        let storage = InMemoryBackend::with_sample_data().unwrap();
        let input = CollectableInput {
            collection_id: Some(seed::COLLECTION_JACK_BANKNOTES),
            collectable_id: seed::BANKNOTE_KUWAITI_DINAR,
            condition_id: seed::CONDITION_FINE,
        };

        let item = input.clone().into_entity(&storage, Uuid::new_v4()).await.unwrap();
        assert_eq!(item.collection_id, seed::COLLECTION_JACK_BANKNOTES);
        assert_eq!(item.collectable.collectable_type, "Dinars");
        assert_eq!(item.condition.id, seed::CONDITION_FINE);

        let err = CollectableInput {
            collectable_id: Uuid::nil(),
            ..input
        }
        .into_entity(&storage, Uuid::new_v4())
        .await
        .unwrap_err();
        assert_eq!(err.code(), "invalid");
    }

    #[tokio::test]
    async fn test_collectable_input_requires_collection() {
        let storage = recollectable_persistence::backends::memory::InMemoryBackend::new();
        let err = CollectableInput::default()
            .into_entity(&storage, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad request: missing required field: CollectionId"
        );
    }
}
