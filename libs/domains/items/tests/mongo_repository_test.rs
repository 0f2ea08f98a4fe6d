//! MongoDB repository tests against a throwaway container.
//!
//! Run with `cargo test -p domain_items -- --ignored` (needs Docker).

use domain_items::{
    Item, ItemError, ItemRepository, ItemService, MongoItemRepository, UpdateItem, seed,
};
use test_utils::{TestDataBuilder, TestMongo};

async fn seeded_repository(mongo: &TestMongo, test_name: &str) -> MongoItemRepository {
    let builder = TestDataBuilder::from_test_name(test_name);
    let repository = MongoItemRepository::new(mongo.database(&builder.database_name()));

    let items = seed::initialize(&repository).await.unwrap();
    assert_eq!(items.len(), 5);

    repository
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_seed_then_find_all() {
    let mongo = TestMongo::new().await;
    let repository = seeded_repository(&mongo, "test_seed_then_find_all").await;

    assert_eq!(repository.find_all().await.unwrap().len(), 5);

    // Re-seeding replaces rather than appends.
    seed::initialize(&repository).await.unwrap();
    assert_eq!(repository.find_all().await.unwrap().len(), 5);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_fixed_seed_item() {
    let mongo = TestMongo::new().await;
    let repository = seeded_repository(&mongo, "test_find_by_id_fixed_seed_item").await;

    let item = repository.find_by_id("AB").await.unwrap().unwrap();
    assert_eq!(item.description, "Bose Headphones");
    assert_eq!(item.price, 149.9);

    assert!(repository.find_by_id("DEF").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_generates_id() {
    let mongo = TestMongo::new().await;
    let repository = seeded_repository(&mongo, "test_save_generates_id").await;

    let saved = repository
        .save(Item::new("IPhone X", 999.99))
        .await
        .unwrap();

    let id = saved.id.clone().unwrap();
    assert!(!id.is_empty());
    assert_eq!(saved.description, "IPhone X");
    assert_eq!(saved.price, 999.99);
    assert_eq!(repository.find_by_id(&id).await.unwrap(), Some(saved));
    assert_eq!(repository.find_all().await.unwrap().len(), 6);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_by_id_removes_one() {
    let mongo = TestMongo::new().await;
    let repository = seeded_repository(&mongo, "test_delete_by_id_removes_one").await;

    repository.delete_by_id("AB").await.unwrap();
    assert_eq!(repository.find_all().await.unwrap().len(), 4);

    // Deleting again is not an error.
    repository.delete_by_id("AB").await.unwrap();
    assert_eq!(repository.find_all().await.unwrap().len(), 4);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_description() {
    let mongo = TestMongo::new().await;
    let repository = seeded_repository(&mongo, "test_find_by_description").await;

    let item = repository
        .find_by_description("Bose Headphones")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.id.as_deref(), Some("AB"));

    assert!(
        repository
            .find_by_description("bose headphones")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_description_prefers_smallest_id() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_find_by_description_prefers_smallest_id");
    let repository = MongoItemRepository::with_collection(
        mongo.database(&builder.database_name()),
        "duplicates",
    );

    for id in ["c", "a", "b"] {
        repository
            .save(Item::with_id(id, "Same", 1.0))
            .await
            .unwrap();
    }

    let item = repository
        .find_by_description("Same")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.id.as_deref(), Some("a"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_through_service() {
    let mongo = TestMongo::new().await;
    let repository = seeded_repository(&mongo, "test_update_through_service").await;
    let service = ItemService::new(repository);

    let updated = service
        .update_item(
            "AB",
            UpdateItem {
                description: "Bose Headphones".into(),
                price: 129.9,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 129.9);
    assert_eq!(service.get_item("AB").await.unwrap().price, 129.9);

    let missing = service
        .update_item(
            "DEF",
            UpdateItem {
                description: "x".into(),
                price: 1.0,
            },
        )
        .await;
    assert!(matches!(missing, Err(ItemError::NotFound(_))));
    assert_eq!(service.list_items().await.unwrap().len(), 5);
}
