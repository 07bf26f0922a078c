//! Loading of the product seed dataset.
//!
//! The dataset is a JSON array of product objects:
//!
//! ```json
//! [
//!   {
//!     "name": "S690pro",
//!     "price": 199.99,
//!     "tags": ["smart", "connected", "wireless"],
//!     "metrics": { "totalWishlists": 120, "totalQuantitySold": 750, "totalReviews": 25, "avgRating": 4.6 }
//!   }
//! ]
//! ```

use std::path::Path;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::NewProduct;

/// Parse a dataset from its JSON text
pub fn parse_dataset(json: &str) -> ProductResult<Vec<NewProduct>> {
    serde_json::from_str(json).map_err(|e| ProductError::Dataset(e.to_string()))
}

/// Read and parse a dataset file
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_dataset(path: impl AsRef<Path>) -> ProductResult<Vec<NewProduct>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ProductError::Dataset(format!("{}: {}", path.display(), e)))?;

    let products = parse_dataset(&contents)?;
    tracing::info!(count = products.len(), "Loaded product dataset");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DATASET: &str = r#"[
        {
            "name": "S690pro",
            "price": 199.99,
            "tags": ["smart", "wireless"],
            "metrics": { "totalWishlists": 120, "totalQuantitySold": 750, "totalReviews": 25, "avgRating": 4.6 }
        },
        { "name": "Cable", "price": 9.5, "tags": ["usb"] }
    ]"#;

    #[test]
    fn test_parse_dataset() {
        let products = parse_dataset(DATASET).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].metrics.total_quantity_sold, 750.0);
        assert_eq!(products[1].metrics.avg_rating, 0.0);
    }

    #[test]
    fn test_parse_dataset_rejects_non_array() {
        let result = parse_dataset(r#"{ "name": "x" }"#);
        assert!(matches!(result, Err(ProductError::Dataset(_))));
    }

    #[tokio::test]
    async fn test_load_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let products = load_dataset(file.path()).await.unwrap();
        assert_eq!(products[0].name, "S690pro");
    }

    #[tokio::test]
    async fn test_load_dataset_missing_file() {
        let err = load_dataset("/nonexistent/products.json").await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/products.json"));
    }
}
