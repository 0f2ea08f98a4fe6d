use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::seed;
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    if state.config.items.seed_on_startup {
        let repository = api::items::repository(&state);
        match seed::initialize(&repository).await {
            Ok(items) => info!(
                count = items.len(),
                collection = repository.collection_name(),
                "Seed data loaded"
            ),
            // Seeding is best effort; the API still serves whatever is stored.
            Err(e) => error!("Seeding items failed: {}", e),
        }
    }

    let api_routes = api::routes(&state);
    let docs = openapi::document(&state.config.items.base_path);
    let router = create_router(api_routes, docs)?;
    let app = router.merge(health_router(state.config.app));

    info!(
        base_path = %state.config.items.base_path,
        shutdown_timeout = ?state.config.server.shutdown_timeout,
        "Starting Items API"
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, async move {
        info!("Shutting down: closing MongoDB connections");
        // `shutdown` waits for every outstanding handle, so release ours first.
        let AppState { mongo_client, db, .. } = state;
        drop(db);
        mongo_client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
