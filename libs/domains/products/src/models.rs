use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Sales and engagement counters embedded in every product.
///
/// Stored documents may carry any BSON number here, so every counter is read as `f64`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetrics {
    #[serde(default)]
    pub total_wishlists: f64,
    #[serde(default)]
    pub total_quantity_sold: f64,
    #[serde(default)]
    pub total_reviews: f64,
    #[serde(default)]
    pub avg_rating: f64,
}

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// MongoDB ObjectId, rendered as a hex string in JSON
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "65f1c0ffee00000000000001")]
    pub id: ObjectId,
    pub name: String,
    pub price: f64,
    /// Tags in stored order
    pub tags: Vec<String>,
    pub metrics: ProductMetrics,
}

/// A product record as it appears in the seed dataset.
///
/// `metrics` and each of its counters may be omitted and default to zero.
/// Records are inserted as-is, so MongoDB assigns the `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    #[validate(length(min = 1))]
    pub name: String,
    pub price: f64,
    pub tags: Vec<String>,
    #[serde(default)]
    pub metrics: ProductMetrics,
}

/// Output of the projection pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedProduct {
    pub name: String,
    pub tags: Vec<String>,
    /// Copied from `metrics.totalQuantitySold`
    pub no_of_sales: f64,
    /// Copied from `metrics.avgRating`
    pub average_rating: f64,
}

/// One group of the tag frequency pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TagCount {
    /// Tag value (the group key)
    #[serde(rename = "_id")]
    pub tag: String,
    pub count: i64,
}

/// Payload of `GET /`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductPage {
    /// Number of documents matching the filter, ignoring pagination
    pub count: u64,
    pub products: Vec<Product>,
}

/// Payload of `GET /projected`
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedProducts {
    pub number_of_documents: usize,
    pub data: Vec<ProjectedProduct>,
}

/// Payload of `GET /tags`
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagCounts {
    /// Number of distinct tags, not the sum of their counts
    pub total_distinct_tags: usize,
    pub data: Vec<TagCount>,
}

impl From<Vec<ProjectedProduct>> for ProjectedProducts {
    fn from(data: Vec<ProjectedProduct>) -> Self {
        Self {
            number_of_documents: data.len(),
            data,
        }
    }
}

impl From<Vec<TagCount>> for TagCounts {
    fn from(data: Vec<TagCount>) -> Self {
        Self {
            total_distinct_tags: data.len(),
            data,
        }
    }
}
