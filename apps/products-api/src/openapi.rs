//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product search, projection and tag statistics over MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product search and statistics endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_paths_are_nested() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/products"));
        assert!(doc.paths.paths.contains_key("/api/products/projected"));
        assert!(doc.paths.paths.contains_key("/api/products/tags"));
    }
}
