//! Translation of `GET /` query parameters into MongoDB find arguments.
//!
//! Raw parameters arrive as strings ([`SearchParams`]) and are turned into a
//! [`ProductQuery`]: a filter document, a price sort and a skip/limit pair.
//! A parameter counts as present only when it carries a non-empty value.

use mongodb::bson::{Document, doc};
use mongodb::options::FindOptions;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{ProductError, ProductResult};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Field matched by the `category` parameter.
///
/// NOTE: `Product` has no `category` field, so against seeded data this
/// clause matches nothing. Known inconsistency, kept until the schema
/// grows the field.
pub const CATEGORY_FIELD: &str = "category";

/// Raw query parameters accepted by the search endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
    /// Exact category value
    pub category: Option<String>,
    /// `asc` sorts by ascending price, any other value (or none) by descending price
    pub sort: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<String>,
}

/// Inclusive price constraint
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceRange {
    Between { min: f64, max: f64 },
    AtLeast(f64),
    AtMost(f64),
}

impl PriceRange {
    /// `None` when neither bound is given
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        match (min, max) {
            (Some(min), Some(max)) => Some(PriceRange::Between { min, max }),
            (Some(min), None) => Some(PriceRange::AtLeast(min)),
            (None, Some(max)) => Some(PriceRange::AtMost(max)),
            (None, None) => None,
        }
    }

    pub fn to_document(self) -> Document {
        match self {
            PriceRange::Between { min, max } => doc! { "$gte": min, "$lte": max },
            PriceRange::AtLeast(min) => doc! { "$gte": min },
            PriceRange::AtMost(max) => doc! { "$lte": max },
        }
    }
}

/// A single predicate of the search filter; clauses are ANDed together
#[derive(Debug, Clone, PartialEq)]
pub enum FilterClause {
    /// Name contains the text anywhere, ignoring case
    NameContains(String),
    /// Named field equals the value exactly
    FieldEquals { field: String, value: String },
    Price(PriceRange),
}

impl FilterClause {
    fn apply(&self, target: &mut Document) {
        match self {
            FilterClause::NameContains(text) => {
                target.insert(
                    "name",
                    doc! { "$regex": regex::escape(text), "$options": "i" },
                );
            }
            FilterClause::FieldEquals { field, value } => {
                target.insert(field.as_str(), value.as_str());
            }
            FilterClause::Price(range) => {
                target.insert("price", range.to_document());
            }
        }
    }
}

/// Conjunction of filter clauses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    clauses: Vec<FilterClause>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    /// Build the MongoDB filter document. An empty filter matches everything.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        for clause in &self.clauses {
            clause.apply(&mut document);
        }
        document
    }
}

/// Price ordering of the search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Only the exact value `asc` selects ascending order
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("asc") => SortOrder::Ascending,
            _ => SortOrder::default(),
        }
    }

    /// Price first, then `_id` ascending so equal prices page deterministically
    pub fn to_document(self) -> Document {
        match self {
            SortOrder::Ascending => doc! { "price": 1, "_id": 1 },
            SortOrder::Descending => doc! { "price": -1, "_id": 1 },
        }
    }
}

/// Page window: skip `(page - 1) * limit`, then take `limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> ProductResult<Self> {
        if page == 0 {
            return Err(ProductError::InvalidQuery(
                "page must be at least 1".to_string(),
            ));
        }
        if limit == 0 || limit > i64::MAX as u64 {
            return Err(ProductError::InvalidQuery(format!(
                "limit must be between 1 and {}",
                i64::MAX
            )));
        }
        if (page - 1).checked_mul(limit).is_none() {
            return Err(ProductError::InvalidQuery(format!(
                "page {} with limit {} is out of range",
                page, limit
            )));
        }
        Ok(Self { page, limit })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Fully resolved search request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub pagination: Pagination,
    pub sort: SortOrder,
}

impl ProductQuery {
    pub fn find_options(&self) -> FindOptions {
        FindOptions::builder()
            .sort(self.sort.to_document())
            .skip(self.pagination.skip())
            .limit(self.pagination.limit() as i64)
            .build()
    }
}

impl TryFrom<SearchParams> for ProductQuery {
    type Error = ProductError;

    fn try_from(params: SearchParams) -> ProductResult<Self> {
        let page = match present(&params.page) {
            Some(raw) => parse_count("page", raw)?,
            None => DEFAULT_PAGE,
        };
        let limit = match present(&params.limit) {
            Some(raw) => parse_count("limit", raw)?,
            None => DEFAULT_LIMIT,
        };
        let pagination = Pagination::new(page, limit)?;

        let mut filter = ProductFilter::new();
        if let Some(search) = present(&params.search) {
            filter = filter.with(FilterClause::NameContains(search.to_string()));
        }
        if let Some(category) = present(&params.category) {
            filter = filter.with(FilterClause::FieldEquals {
                field: CATEGORY_FIELD.to_string(),
                value: category.to_string(),
            });
        }

        let min_price = present(&params.min_price)
            .map(|raw| parse_price("minPrice", raw))
            .transpose()?;
        let max_price = present(&params.max_price)
            .map(|raw| parse_price("maxPrice", raw))
            .transpose()?;
        if let Some(range) = PriceRange::from_bounds(min_price, max_price) {
            filter = filter.with(FilterClause::Price(range));
        }

        Ok(Self {
            filter,
            pagination,
            sort: SortOrder::from_param(present(&params.sort)),
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_count(key: &str, raw: &str) -> ProductResult<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        ProductError::InvalidQuery(format!("{} must be a positive integer, got '{}'", key, raw))
    })
}

fn parse_price(key: &str, raw: &str) -> ProductResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| ProductError::InvalidQuery(format!("{} must be a number, got '{}'", key, raw)))
}
