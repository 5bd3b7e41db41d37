//! HTTP server entry point and Axum router setup.
//!
//! Registers the health check and the placeholder query route, then serves
//! on port 8080 until the process is killed or the listener fails.

mod handlers;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

/// All interfaces, port 8080. Not configurable: no flag, file, or
/// environment variable reaches this.
const LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    serve(LISTEN_ADDR).await
}

/// Builds the application router: exact path match only, any method accepted.
fn app() -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/query", any(handlers::query::query))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", any(handlers::health))
}

/// Binds the listener and serves forever. A bind failure is fatal: the error
/// propagates out of `main` and the process exits non-zero.
async fn serve(addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("GraphQL API server running on http://{}", addr);

    axum::serve(listener, app()).await?;

    Ok(())
}
