//! HTTP handlers for Products API

use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductError;
use crate::models::{Product, ProductMetrics, ProductPage, ProjectedProduct, ProjectedProducts, TagCount, TagCounts};
use crate::query::SearchParams;
use crate::repository::ProductRepository;
use crate::response::{Endpoint, EndpointError, Failure, Success};
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(search_products, projected_products, tag_counts),
    components(schemas(
        Product,
        ProductMetrics,
        ProductPage,
        ProjectedProduct,
        ProjectedProducts,
        TagCount,
        TagCounts,
        Failure
    )),
    tags(
        (name = "Products", description = "Product search and statistics endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(search_products))
        .route("/projected", get(projected_products))
        .route("/tags", get(tag_counts))
        .with_state(shared_service)
}

/// Search, filter, sort and paginate products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(SearchParams),
    responses(
        (status = 200, description = "Page of matching products", body = Success<ProductPage>),
        (status = 404, description = "Products Not Found", body = Failure)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Success<ProductPage>, EndpointError> {
    let fail = |err| EndpointError::new(Endpoint::Search, err);

    let Query(params) = params.map_err(|e| fail(ProductError::InvalidQuery(e.body_text())))?;
    let page = service.search_products(params).await.map_err(fail)?;
    Ok(Success::new(page))
}

/// Name, tags, sales and rating of every product
#[utoipa::path(
    get,
    path = "/projected",
    tag = "Products",
    responses(
        (status = 200, description = "Projected products", body = Success<ProjectedProducts>),
        (status = 400, description = "Could Not Fetch Products", body = Failure)
    )
)]
async fn projected_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<Success<ProjectedProducts>, EndpointError> {
    service
        .projected_products()
        .await
        .map(Success::new)
        .map_err(|e| EndpointError::new(Endpoint::Projected, e))
}

/// Occurrences of every tag, most frequent first
#[utoipa::path(
    get,
    path = "/tags",
    tag = "Products",
    responses(
        (status = 200, description = "Tag counts", body = Success<TagCounts>),
        (status = 400, description = "Could Not Fetch Products", body = Failure)
    )
)]
async fn tag_counts<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<Success<TagCounts>, EndpointError> {
    service
        .tag_counts()
        .await
        .map(Success::new)
        .map_err(|e| EndpointError::new(Endpoint::TagCount, e))
}
