//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::doc,
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProjectedProduct, TagCount};
use crate::pipeline;
use crate::query::{ProductFilter, ProductQuery};
use crate::repository::ProductRepository;

pub const DEFAULT_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a repository over the `products` collection
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Create the indexes backing price sorting/ranges and tag grouping
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_price".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "tags": 1 })
                .options(IndexOptions::builder().name("idx_tags".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let cursor = self
            .collection
            .find(query.filter.to_document())
            .with_options(query.find_options())
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64> {
        let count = self
            .collection
            .count_documents(filter.to_document())
            .await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn projected(&self) -> ProductResult<Vec<ProjectedProduct>> {
        let cursor = self
            .collection
            .aggregate(pipeline::projection())
            .with_type::<ProjectedProduct>()
            .await?;
        let projected: Vec<ProjectedProduct> = cursor.try_collect().await?;

        Ok(projected)
    }

    #[instrument(skip(self))]
    async fn tag_counts(&self) -> ProductResult<Vec<TagCount>> {
        let cursor = self
            .collection
            .aggregate(pipeline::tag_frequency())
            .with_type::<TagCount>()
            .await?;
        let counts: Vec<TagCount> = cursor.try_collect().await?;

        Ok(counts)
    }

    #[instrument(skip(self, products), fields(product_count = products.len()))]
    async fn replace_all(&self, products: Vec<NewProduct>) -> ProductResult<u64> {
        let deleted = self.collection.delete_many(doc! {}).await?;
        tracing::info!(deleted = deleted.deleted_count, "Cleared products collection");

        if products.is_empty() {
            return Ok(0);
        }

        // Seed records carry no `_id`; the server assigns ObjectIds.
        let result = self
            .collection
            .clone_with_type::<NewProduct>()
            .insert_many(products)
            .await?;

        let inserted = result.inserted_ids.len() as u64;
        tracing::info!(inserted, "Products inserted");
        Ok(inserted)
    }
}
