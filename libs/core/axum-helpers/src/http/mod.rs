//! HTTP middleware module.
//!
//! - CORS configuration from `CORS_ALLOWED_ORIGIN`
//! - Security headers
//! - JSON fallback for unknown routes

pub mod cors;
pub mod fallback;
pub mod security;

pub use cors::cors_layer_from_env;
pub use fallback::not_found;
pub use security::security_headers;
