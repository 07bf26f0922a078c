//! JSON envelopes shared by every products endpoint.
//!
//! Success: `{"status": "success", "data": ...}`.
//! Failure: `{"message": ..., "status": "Error", "error": ...}` with an
//! endpoint-specific message and status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ProductError;

pub const SUCCESS_STATUS: &str = "success";
pub const ERROR_STATUS: &str = "Error";

/// Successful response wrapper
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Success<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: SUCCESS_STATUS,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Failure response body
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Failure {
    /// Fixed, endpoint-specific message
    pub message: &'static str,
    pub status: &'static str,
    /// Description of the underlying error
    pub error: String,
}

/// Which endpoint failed; decides the failure message and status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Projected,
    TagCount,
}

impl Endpoint {
    pub fn failure_status(self) -> StatusCode {
        match self {
            Endpoint::Search => StatusCode::NOT_FOUND,
            Endpoint::Projected | Endpoint::TagCount => StatusCode::BAD_REQUEST,
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Search => "Products Not Found",
            Endpoint::Projected | Endpoint::TagCount => "Could Not Fetch Products",
        }
    }
}

/// A [`ProductError`] bound to the endpoint it is reported from
#[derive(Debug)]
pub struct EndpointError {
    endpoint: Endpoint,
    source: ProductError,
}

impl EndpointError {
    pub fn new(endpoint: Endpoint, source: ProductError) -> Self {
        Self { endpoint, source }
    }

    pub fn body(&self) -> Failure {
        Failure {
            message: self.endpoint.failure_message(),
            status: ERROR_STATUS,
            error: self.source.to_string(),
        }
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        tracing::warn!(
            endpoint = ?self.endpoint,
            error = %self.source,
            "Request failed"
        );
        (self.endpoint.failure_status(), Json(self.body())).into_response()
    }
}
