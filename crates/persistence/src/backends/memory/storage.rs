//! ResourceStorage implementation for the in-memory backend.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::core::ResourceStorage;
use crate::error::{StorageError, StorageResult};
use crate::specification::Specification;
use crate::types::{Entity, SortInstruction, compare_entities};

use super::InMemoryBackend;

/// Rewrites sort paths into their canonical spelling, rejecting unknown ones.
fn canonical_sort<E: Entity>(sort: &[SortInstruction]) -> StorageResult<Vec<SortInstruction>> {
    sort.iter()
        .map(|instruction| {
            E::resolve_attribute(&instruction.path)
                .map(|path| SortInstruction::new(path, instruction.direction))
                .ok_or_else(|| StorageError::unknown_attribute(E::RESOURCE_TYPE, &instruction.path))
        })
        .collect()
}

#[async_trait]
impl ResourceStorage for InMemoryBackend {
    fn backend_name(&self) -> &'static str {
        Self::NAME
    }

    async fn query<E: Entity>(
        &self,
        specification: &Specification<E>,
        sort: &[SortInstruction],
    ) -> StorageResult<Vec<E>> {
        let sort = canonical_sort::<E>(sort)?;

        let mut matches = self.read_table(|rows: &[E]| {
            rows.iter()
                .filter(|row| specification.is_satisfied_by(row))
                .cloned()
                .collect::<Vec<_>>()
        })?;

        // Stable, so ties keep insertion order.
        matches.sort_by(|a, b| compare_entities(a, b, &sort));

        debug!(
            resource_type = E::RESOURCE_TYPE,
            filter = %specification,
            sort = ?sort,
            matched = matches.len(),
            "Executed in-memory query"
        );

        Ok(matches)
    }

    async fn find<E: Entity>(&self, specification: &Specification<E>) -> StorageResult<Option<E>> {
        self.read_table(|rows: &[E]| {
            rows.iter()
                .find(|row| specification.is_satisfied_by(row))
                .cloned()
        })
    }

    async fn insert<E: Entity>(&self, entity: E) -> StorageResult<E> {
        let stored = self.put(entity)?;
        debug!(
            resource_type = E::RESOURCE_TYPE,
            id = %stored.id(),
            "Inserted entity"
        );
        Ok(stored)
    }

    async fn update<E: Entity>(&self, entity: E) -> StorageResult<E> {
        let id = entity.id();
        self.write_table(|rows: &mut Vec<E>| {
            let row = rows
                .iter_mut()
                .find(|row| row.id() == id)
                .ok_or_else(|| StorageError::not_found(E::RESOURCE_TYPE, id))?;
            *row = entity.clone();
            Ok(())
        })?;
        debug!(resource_type = E::RESOURCE_TYPE, id = %id, "Updated entity");
        Ok(entity)
    }

    async fn delete<E: Entity>(&self, id: Uuid) -> StorageResult<()> {
        self.write_table(|rows: &mut Vec<E>| {
            let position = rows
                .iter()
                .position(|row| row.id() == id)
                .ok_or_else(|| StorageError::not_found(E::RESOURCE_TYPE, id))?;
            rows.remove(position);
            Ok(())
        })?;
        debug!(resource_type = E::RESOURCE_TYPE, id = %id, "Deleted entity");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Coin, Country};
    use crate::error::{ResourceError, ValidationError};

    fn country(name: &str) -> Country {
        Country {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
        }
    }

    fn coin(kind: &str, country_name: &str, face_value: i32) -> Coin {
        Coin {
            id: Uuid::new_v4(),
            coin_type: kind.to_string(),
            face_value,
            country: country(country_name),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_query_filters_and_sorts() {
        let backend = InMemoryBackend::new();
        backend.put(coin("Yen", "Japan", 100)).unwrap();
        backend.put(coin("Dollars", "Canada", 2)).unwrap();
        backend.put(coin("Dollars", "Canada", 1)).unwrap();
        backend.put(coin("Pesos", "Mexico", 5)).unwrap();

        let spec = !Specification::<Coin>::equals_ignore_case("Country.Name", "mexico").unwrap();
        let result = backend
            .query(
                &spec,
                &[
                    SortInstruction::ascending("Country.Name"),
                    SortInstruction::descending("FaceValue"),
                ],
            )
            .await
            .unwrap();

        let summary: Vec<_> = result
            .iter()
            .map(|c| (c.country.name.as_str(), c.face_value))
            .collect();
        assert_eq!(summary, [("Canada", 2), ("Canada", 1), ("Japan", 100)]);
    }

    #[tokio::test]
    async fn test_sort_is_stable() {
        let backend = InMemoryBackend::new();
        let first = backend.put(coin("Dollars", "Canada", 1)).unwrap();
        let second = backend.put(coin("Cents", "Canada", 1)).unwrap();

        let result = backend
            .query(
                &Specification::<Coin>::all(),
                &[SortInstruction::ascending("country.name")],
            )
            .await
            .unwrap();
        assert_eq!(result[0].id, first.id);
        assert_eq!(result[1].id, second.id);
    }

    #[tokio::test]
    async fn test_unknown_sort_path_rejected() {
        let backend = InMemoryBackend::new();
        let err = backend
            .query(
                &Specification::<Coin>::all(),
                &[SortInstruction::ascending("Colour")],
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::Validation(ValidationError::UnknownAttribute { .. })
        ));
    }

    #[tokio::test]
    async fn test_find_and_exists() {
        let backend = InMemoryBackend::new();
        let stored = backend.put(country("France")).unwrap();

        let found = backend
            .find(&Specification::<Country>::by_id(stored.id))
            .await
            .unwrap();
        assert_eq!(found, Some(stored.clone()));
        assert!(
            !backend
                .exists(&Specification::<Country>::by_id(Uuid::new_v4()))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_insert_duplicate_rejected() {
        let backend = InMemoryBackend::new();
        let stored = backend.insert(country("Kuwait")).await.unwrap();
        let err = backend.insert(stored).await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::Resource(ResourceError::AlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let backend = InMemoryBackend::new();
        let first = backend.put(country("Japan")).unwrap();
        backend.put(country("France")).unwrap();

        let renamed = Country {
            name: "Nippon".to_string(),
            ..first.clone()
        };
        backend.update(renamed).await.unwrap();

        let all = backend
            .query(&Specification::<Country>::all(), &[])
            .await
            .unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Nippon", "France"]);

        let err = backend.update(country("Kuwait")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete() {
        let backend = InMemoryBackend::new();
        let stored = backend.put(country("Japan")).unwrap();

        backend.delete::<Country>(stored.id).await.unwrap();
        assert_eq!(backend.count::<Country>(), 0);

        let err = backend.delete::<Country>(stored.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_empty_table_reads_as_empty() {
        let backend = InMemoryBackend::new();
        let result = backend
            .query(&Specification::<Coin>::all(), &[])
            .await
            .unwrap();
        assert!(result.is_empty());
    }
}
