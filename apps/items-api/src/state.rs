//! Shared application state.

use database::mongodb::{Client, Database};

/// Cloned into routers that need more than the items service
/// (the client shares its connection pool across clones).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}
