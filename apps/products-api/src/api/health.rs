//! Readiness endpoint backed by a MongoDB ping

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use mongodb::Client;

async fn ready(State(client): State<Client>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async {
            database::mongodb::ping(&client)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string())
        }),
    )];

    match run_health_checks(checks).await {
        Ok(response) | Err(response) => response,
    }
}

/// `GET /ready`: 200 when MongoDB answers a ping, 503 otherwise
pub fn router(client: Client) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(client)
}
