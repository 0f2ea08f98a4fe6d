use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for Item persistence
///
/// Absent records are reported as `None`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every stored item, in no particular order
    async fn find_all(&self) -> ItemResult<Vec<Item>>;

    async fn find_by_id(&self, id: &str) -> ItemResult<Option<Item>>;

    /// Exact match on description; among duplicates the smallest id wins
    async fn find_by_description(&self, description: &str) -> ItemResult<Option<Item>>;

    /// Insert when `item.id` is `None`, otherwise replace-or-insert by id.
    /// Returns the stored item with its id set.
    async fn save(&self, item: Item) -> ItemResult<Item>;

    /// Succeeds whether or not a record existed
    async fn delete_by_id(&self, id: &str) -> ItemResult<()>;

    /// Remove every item and return how many were deleted
    async fn delete_all(&self) -> ItemResult<u64>;
}
