//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemDocument};
use crate::repository::ItemRepository;

/// Collection used when none is configured
pub const DEFAULT_COLLECTION: &str = "item";

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Repository over the `item` collection of `db`
    ///
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoItemRepository::new(client.database("items"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<ItemDocument>(collection_name);
        Self { collection }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<ItemDocument> = cursor.try_collect().await?;

        Ok(docs.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ItemResult<Option<Item>> {
        let item = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(item.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn find_by_description(&self, description: &str) -> ItemResult<Option<Item>> {
        let item = self
            .collection
            .find_one(doc! { "description": description })
            .sort(doc! { "_id": 1 })
            .await?;
        Ok(item.map(Item::from))
    }

    #[instrument(skip(self, item), fields(item_id = ?item.id))]
    async fn save(&self, item: Item) -> ItemResult<Item> {
        let is_new = item.id.is_none();
        let doc = ItemDocument::from_item(item);

        if is_new {
            self.collection.insert_one(&doc).await?;
            tracing::info!(item_id = %doc.id, "Item created");
        } else {
            self.collection
                .replace_one(doc! { "_id": doc.id.as_str() }, &doc)
                .upsert(true)
                .await?;
            tracing::info!(item_id = %doc.id, "Item saved");
        }

        Ok(doc.into())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> ItemResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        tracing::info!(item_id = %id, deleted = result.deleted_count, "Item delete requested");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> ItemResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
