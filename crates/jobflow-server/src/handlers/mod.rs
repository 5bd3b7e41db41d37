//! HTTP route handlers for the API server.

pub mod query;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK\n"
}
