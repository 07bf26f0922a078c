use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Fallback for routes that match nothing
pub async fn not_found() -> Response {
    let body = Json(json!({
        "status": "Error",
        "message": "Route not found",
    }));

    (StatusCode::NOT_FOUND, body).into_response()
}
