//! Placeholder query endpoint for the GraphQL API.
//!
//! The real endpoint will hand requests to a schema executor built on
//! `async-graphql` once the schema and resolvers exist. Until then every
//! request gets a canned payload so frontend probes have something to hit.

use axum::http::header;
use axum::response::IntoResponse;

/// Fixed payload served until the executor lands.
const PLACEHOLDER_BODY: &str = r#"{"data":"Hello from Go GraphQL!"}"#;

/// Serves the canned query response. Any method is accepted and the request
/// body, if present, is ignored; no query parsing happens here yet.
pub async fn query() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], PLACEHOLDER_BODY)
}
