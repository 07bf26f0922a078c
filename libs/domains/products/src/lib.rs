//! Products Domain
//!
//! Read-only search and statistics over a MongoDB `products` collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Query building, seeding validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Find/count/aggregate (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product document, pipeline outputs, payloads
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("shop");
//!
//! let repository = MongoProductRepository::new(&db);
//! let service = ProductService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod pipeline;
pub mod query;
pub mod repository;
pub mod response;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    NewProduct, Product, ProductMetrics, ProductPage, ProjectedProduct, ProjectedProducts,
    TagCount, TagCounts,
};
pub use crate::mongodb::MongoProductRepository;
pub use query::{ProductFilter, ProductQuery, SearchParams, SortOrder};
pub use repository::ProductRepository;
pub use service::ProductService;
