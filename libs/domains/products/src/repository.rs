use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProjectedProduct, TagCount};
use crate::query::{ProductFilter, ProductQuery};

/// Repository trait for Product persistence
///
/// Every read runs against the whole collection; the search filter and page
/// window are resolved by the caller into a [`ProductQuery`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find one page of products matching the query, sorted by price
    async fn find(&self, query: ProductQuery) -> ProductResult<Vec<Product>>;

    /// Count all products matching a filter, ignoring pagination
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64>;

    /// Run the projection pipeline
    async fn projected(&self) -> ProductResult<Vec<ProjectedProduct>>;

    /// Run the tag frequency pipeline
    async fn tag_counts(&self) -> ProductResult<Vec<TagCount>>;

    /// Delete every product, then insert the given ones. Returns the number inserted.
    async fn replace_all(&self, products: Vec<NewProduct>) -> ProductResult<u64>;
}
