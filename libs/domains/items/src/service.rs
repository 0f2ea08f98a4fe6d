//! Item Service - use-case layer between handlers and the repository

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service; turns absent records into [`ItemError::NotFound`]
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: &str) -> ItemResult<Item> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ItemError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, item))]
    pub async fn create_item(&self, item: Item) -> ItemResult<Item> {
        self.repository.save(item).await
    }

    /// Overwrite description and price of an existing item.
    /// Nothing is created when the id is unknown.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: &str, input: UpdateItem) -> ItemResult<Item> {
        let mut item = self.get_item(id).await?;
        item.apply_update(input);

        self.repository.save(item).await
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> ItemResult<()> {
        self.repository.delete_by_id(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;

    #[tokio::test]
    async fn test_get_item_missing_is_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "missing")
            .times(1)
            .returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let err = service.get_item("missing").await.unwrap_err();

        assert!(matches!(err, ItemError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "AB")
            .returning(|_| Ok(Some(Item::with_id("AB", "Bose Headphones", 149.9))));
        repo.expect_save()
            .withf(|item| *item == Item::with_id("AB", "Bose QC", 129.9))
            .times(1)
            .returning(Ok);

        let service = ItemService::new(repo);
        let updated = service
            .update_item(
                "AB",
                UpdateItem {
                    description: "Bose QC".into(),
                    price: 129.9,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id.as_deref(), Some("AB"));
        assert_eq!(updated.price, 129.9);
    }

    #[tokio::test]
    async fn test_update_unknown_does_not_save() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().never();

        let service = ItemService::new(repo);
        let result = service
            .update_item(
                "nope",
                UpdateItem {
                    description: "x".into(),
                    price: 1.0,
                },
            )
            .await;

        assert!(matches!(result, Err(ItemError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_database_errors_propagate() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_all()
            .returning(|| Err(ItemError::Database("server selection timeout".into())));

        let service = ItemService::new(repo);
        assert!(matches!(
            service.list_items().await,
            Err(ItemError::Database(_))
        ));
    }
}
