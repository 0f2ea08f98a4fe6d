//! API routes module

pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Items routes under the configured base path, plus `/ready`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest(&state.config.items.base_path, items::router(state))
        .merge(health::router(state.clone()))
}
