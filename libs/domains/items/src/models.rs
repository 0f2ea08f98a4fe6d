use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Item entity as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": "AB", "description": "Bose Headphones", "price": 149.9}))]
pub struct Item {
    /// Unique identifier; assigned by the server when absent on create
    #[serde(default)]
    pub id: Option<String>,
    pub description: String,
    pub price: f64,
}

impl Item {
    /// An item without an id, to be assigned on save
    pub fn new(description: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            description: description.into(),
            price,
        }
    }

    pub fn with_id(id: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            id: Some(id.into()),
            description: description.into(),
            price,
        }
    }

    /// Overwrite the mutable fields; the id is left alone
    pub fn apply_update(&mut self, update: UpdateItem) {
        self.description = update.description;
        self.price = update.price;
    }
}

/// Body of a PUT. Both fields are always overwritten.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[schema(example = json!({"description": "Bose Headphones", "price": 129.9}))]
pub struct UpdateItem {
    pub description: String,
    pub price: f64,
}

/// Stored shape of an item: the id lives under `_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub description: String,
    pub price: f64,
}

impl ItemDocument {
    /// Take the item's id, or mint a fresh ObjectId hex string
    pub fn from_item(item: Item) -> Self {
        Self {
            id: item.id.unwrap_or_else(|| ObjectId::new().to_hex()),
            description: item.description,
            price: item.price,
        }
    }
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Self {
            id: Some(doc.id),
            description: doc.description,
            price: doc.price,
        }
    }
}
