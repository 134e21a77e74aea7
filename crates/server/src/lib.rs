//! HTTP backend for the term-scoped app: slug resolution API, term-guarded
//! page routes, and the legacy-path redirect.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::{Router, middleware::from_fn};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// The fully assembled application router.
pub fn app() -> Router {
    routes::router()
        .layer(from_fn(middleware::legacy_term_redirect))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
