//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, ProductPage, ProjectedProducts, TagCounts};
use crate::query::{ProductQuery, SearchParams};
use crate::repository::ProductRepository;

/// Product service providing the read operations behind the HTTP endpoints
/// plus bulk seeding.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Search, filter, sort and paginate products.
    ///
    /// `count` comes from a separate count over the same filter, so it is the
    /// total number of matches rather than the size of the page.
    #[instrument(skip(self))]
    pub async fn search_products(&self, params: SearchParams) -> ProductResult<ProductPage> {
        let query = ProductQuery::try_from(params)?;
        let filter = query.filter.clone();

        let products = self.repository.find(query).await?;
        let count = self.repository.count(filter).await?;

        Ok(ProductPage { count, products })
    }

    /// Every product reduced to name, tags, sales and rating
    #[instrument(skip(self))]
    pub async fn projected_products(&self) -> ProductResult<ProjectedProducts> {
        let projected = self.repository.projected().await?;
        Ok(ProjectedProducts::from(projected))
    }

    /// Tag occurrence counts, most frequent first
    #[instrument(skip(self))]
    pub async fn tag_counts(&self) -> ProductResult<TagCounts> {
        let counts = self.repository.tag_counts().await?;
        Ok(TagCounts::from(counts))
    }

    /// Replace the whole collection with the given dataset
    #[instrument(skip(self, products), fields(product_count = products.len()))]
    pub async fn seed(&self, products: Vec<NewProduct>) -> ProductResult<u64> {
        for (index, product) in products.iter().enumerate() {
            product.validate().map_err(|e| {
                ProductError::Validation(format!("product #{}: {}", index, e))
            })?;
        }

        let inserted = self.repository.replace_all(products).await?;
        tracing::info!(inserted, "Products seeded");
        Ok(inserted)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
