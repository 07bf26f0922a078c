//! Products API - product search and statistics over MongoDB

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

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

    info!(database = %config.mongodb.database(), "Connecting to MongoDB");

    let mongo_client = database::mongodb::connect_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        database = %config.mongodb.database(),
        collection = %config.collection,
        "Successfully connected to MongoDB"
    );

    let state = AppState {
        config: config.clone(),
        mongo_client,
        db,
    };

    if let Some(path) = &state.config.seed_file {
        api::products::seed_from_file(&state, path).await?;
    }
    api::products::init_indexes(&state).await?;

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.mongo_client.clone()));

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    let mongo_client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
