use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Name of the variable holding comma-separated allowed origins
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Parse comma-separated origins, skipping blanks
fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ALLOWED_ORIGIN, e),
            )
        })
}

/// Build a read-only CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Returns `Ok(None)` when the variable is unset or lists no origins, and
/// an `InvalidInput` error when an origin is not a valid header value.
///
/// Examples:
/// - `CORS_ALLOWED_ORIGIN=http://localhost:3000,http://localhost:5173`
/// - `CORS_ALLOWED_ORIGIN=https://shop.example.com`
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let Ok(raw) = std::env::var(CORS_ALLOWED_ORIGIN) else {
        return Ok(None);
    };

    let origins = parse_origins(&raw)?;
    if origins.is_empty() {
        return Ok(None);
    }

    info!("CORS configured with allowed origins: {}", raw);

    let layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    Ok(Some(layer))
}
