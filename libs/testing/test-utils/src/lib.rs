//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongodb")
//! - `TestDataBuilder`: Deterministic test data naming (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! # async fn example() {
//! let mongo = TestMongo::new().await;
//! let builder = TestDataBuilder::from_test_name("search_by_price");
//!
//! let db = mongo.database(&builder.database_name());
//! # }
//! ```

#[cfg(feature = "mongodb")]
mod mongodb;

#[cfg(feature = "mongodb")]
pub use crate::mongodb::TestMongo;

/// Builder for deterministic, per-test names
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (seed is the hash of the name)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_tag_counts");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Database name unique to this builder's seed
    pub fn database_name(&self) -> String {
        format!("test_{:x}", self.seed)
    }
}
