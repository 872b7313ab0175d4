//! Query tests for the in-memory backend over the sample catalogue.

use recollectable_persistence::backends::memory::{InMemoryBackend, seed};
use recollectable_persistence::entities::{Banknote, Coin, CollectionCollectable, Country};
use recollectable_persistence::{PageComputer, ResourceStorage, SortInstruction, Specification};

fn backend() -> InMemoryBackend {
    InMemoryBackend::with_sample_data().expect("sample data")
}

#[tokio::test]
async fn test_specification_sort_and_page_compose() {
    let backend = backend();
    let spec = Specification::<Coin>::equals_ignore_case("Metal", "SILVER").unwrap();
    let sort = [
        SortInstruction::ascending("Country.Name"),
        SortInstruction::descending("FaceValue"),
    ];

    let coins = backend.query(&spec, &sort).await.unwrap();
    let types: Vec<&str> = coins.iter().map(|c| c.coin_type.as_str()).collect();
    assert_eq!(types, ["Pesos", "Dime", "Dollars"]);

    let page = PageComputer::new(50).create(coins, 2, 2);
    assert_eq!(page.len(), 1);
    assert_eq!(page.total_pages(), 2);
    assert!(page.has_previous());
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_search_across_paths() {
    let backend = backend();
    let spec =
        Specification::<Banknote>::contains_any_ignore_case(&["Country.Name", "Type"], "DIN")
            .unwrap();

    let banknotes = backend.query(&spec, &[]).await.unwrap();
    assert_eq!(banknotes.len(), 1);
    assert_eq!(banknotes[0].id, seed::BANKNOTE_KUWAITI_DINAR);
}

#[tokio::test]
async fn test_nested_collectables_scope() {
    let backend = backend();
    let spec = Specification::<CollectionCollectable>::equals(
        "CollectionId",
        seed::COLLECTION_MICHAEL_BANKNOTES,
    )
    .unwrap();

    let items = backend
        .query(&spec, &[SortInstruction::descending("Collectable.ReleaseDate")])
        .await
        .unwrap();
    let ids: Vec<_> = items.iter().map(|i| i.id).collect();
    assert_eq!(
        ids,
        [seed::COLLECTABLE_MICHAEL_DINAR, seed::COLLECTABLE_MICHAEL_PESO]
    );
}

#[tokio::test]
async fn test_unknown_sort_path_is_rejected() {
    let backend = backend();

    let result = backend
        .query(&Specification::<Country>::all(), &[SortInstruction::ascending("Population")])
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_then_find() {
    let backend = backend();
    let by_id = Specification::<Country>::by_id(seed::COUNTRY_FRANCE);

    assert!(backend.exists(&by_id).await.unwrap());
    backend.delete::<Country>(seed::COUNTRY_FRANCE).await.unwrap();
    assert!(backend.find(&by_id).await.unwrap().is_none());

    let err = backend
        .delete::<Country>(seed::COUNTRY_FRANCE)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
