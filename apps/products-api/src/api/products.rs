//! Products API routes and startup tasks

use domain_products::{handlers, seed};
use std::path::Path;
use tracing::info;

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> axum::Router {
    handlers::router(state.product_service())
}

/// Initialize products indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    state.product_repository().init_indexes().await?;
    Ok(())
}

/// Replace the products collection with the dataset at `path`
pub async fn seed_from_file(state: &AppState, path: &Path) -> eyre::Result<u64> {
    let products = seed::load_dataset(path).await?;
    let inserted = state.product_service().seed(products).await?;
    info!(inserted, path = %path.display(), "Seeded products collection");
    Ok(inserted)
}
