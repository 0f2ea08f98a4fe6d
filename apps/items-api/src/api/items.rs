//! Wires the items domain to the configured collection.

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::state::AppState;

pub fn repository(state: &AppState) -> MongoItemRepository {
    MongoItemRepository::with_collection(state.db.clone(), &state.config.items.collection)
}

pub fn router(state: &AppState) -> Router {
    let service = ItemService::new(repository(state));
    handlers::router(service)
}
