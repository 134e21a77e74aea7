//! Route assembly.

pub mod app_pages;
pub mod term_slugs;

use axum::Router;

pub fn router() -> Router {
    Router::new()
        .merge(app_pages::router())
        .nest("/api", term_slugs::router())
}
