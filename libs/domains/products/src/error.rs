use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Dataset error: {0}")]
    Dataset(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ProductError {
    fn from(err: validator::ValidationErrors) -> Self {
        ProductError::Validation(err.to_string())
    }
}
