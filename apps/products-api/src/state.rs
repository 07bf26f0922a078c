//! Application state management

use domain_products::{MongoProductRepository, ProductService};
use mongodb::{Client, Database};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Client,
    pub db: Database,
}

impl AppState {
    /// Repository over the configured products collection
    pub fn product_repository(&self) -> MongoProductRepository {
        MongoProductRepository::with_collection(&self.db, &self.config.collection)
    }

    pub fn product_service(&self) -> ProductService<MongoProductRepository> {
        ProductService::new(self.product_repository())
    }
}
