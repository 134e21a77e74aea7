//! Slug resolution API consumed by navigation code that has a term
//! object (or nothing at all) and needs a routable slug.

use axum::{
    Router,
    extract::Path,
    response::Json as ResponseJson,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::{
    response::ApiResponse,
    term_slug::{self, Term, TermInfo},
};

use crate::error::ApiError;

/// A slug handed back to navigation code.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct TermSlugResolution {
    pub slug: String,
    pub is_all_terms: bool,
}

impl TermSlugResolution {
    fn new(slug: String) -> Self {
        let is_all_terms = term_slug::is_all_terms_slug(&slug);
        Self { slug, is_all_terms }
    }
}

#[derive(Debug, Clone, Deserialize, TS)]
pub struct ResolveTermSlugRequest {
    pub term: Option<Term>,
    #[serde(default = "default_fallback_to_all")]
    pub fallback_to_all: bool,
}

fn default_fallback_to_all() -> bool {
    true
}

/// GET /api/term-slugs/all-terms
/// Get the reserved slug for the "All Terms" scope
pub async fn get_all_terms_slug() -> ResponseJson<ApiResponse<TermSlugResolution>> {
    ResponseJson(ApiResponse::success(TermSlugResolution::new(
        term_slug::all_terms_slug().to_string(),
    )))
}

/// GET /api/term-slugs/{slug}
/// Decode a slug into the term identity it names
pub async fn get_term_info(
    Path(slug): Path<String>,
) -> Result<ResponseJson<ApiResponse<TermInfo>>, ApiError> {
    let info = term_slug::parse_slug(&slug).ok_or(ApiError::InvalidTermSlug(slug))?;
    Ok(ResponseJson(ApiResponse::success(info)))
}

/// POST /api/term-slugs/resolve
/// Build the slug for a term, or the "All Terms" slug when none is given
pub async fn resolve_term_slug(
    axum::Json(payload): axum::Json<ResolveTermSlugRequest>,
) -> Result<ResponseJson<ApiResponse<TermSlugResolution>>, ApiError> {
    let slug = term_slug::slug_from_term(payload.term.as_ref(), payload.fallback_to_all)?;
    tracing::debug!(%slug, "resolved term slug");
    Ok(ResponseJson(ApiResponse::success(TermSlugResolution::new(
        slug,
    ))))
}

pub fn router() -> Router {
    Router::new().nest(
        "/term-slugs",
        Router::new()
            .route("/all-terms", get(get_all_terms_slug))
            .route("/resolve", post(resolve_term_slug))
            .route("/{slug}", get(get_term_info)),
    )
}
