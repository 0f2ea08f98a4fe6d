//! Startup data for the items collection.

use futures::future::try_join_all;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::Item;
use crate::repository::ItemRepository;

/// Id of the one seed item with a fixed id
pub const FIXED_SEED_ID: &str = "AB";

/// The fixed seed set. Only the Bose item has a preset id.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("Samsung TV", 400.0),
        Item::new("LG TV", 420.0),
        Item::new("Apple Watch", 299.9),
        Item::new("Beats Headphones", 149.9),
        Item::with_id(FIXED_SEED_ID, "Bose Headphones", 149.9),
    ]
}

/// Replace the collection contents with [`seed_items`] and return what was stored.
///
/// Saves run concurrently; the first failure aborts the remaining ones.
#[instrument(skip(repository))]
pub async fn initialize<R>(repository: &R) -> ItemResult<Vec<Item>>
where
    R: ItemRepository + ?Sized,
{
    let removed = repository.delete_all().await?;
    tracing::debug!(removed, "Cleared items collection");

    try_join_all(seed_items().into_iter().map(|item| repository.save(item))).await?;

    let items = repository.find_all().await?;
    for item in &items {
        tracing::info!(
            item_id = item.id.as_deref().unwrap_or_default(),
            description = %item.description,
            price = item.price,
            "Item inserted from seed"
        );
    }

    Ok(items)
}
