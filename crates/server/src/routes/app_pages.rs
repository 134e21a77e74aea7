//! Term-scoped app page routes: the slug guard for everything under
//! `/app/v1/{term_slug}/…`.

use axum::{Router, extract::Path, response::Json as ResponseJson, routing::get};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use utils::{
    response::ApiResponse,
    term_slug::{self, TermInfo},
};

use crate::error::ApiError;

/// Pages of the term-scoped app shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppPage {
    Dashboard,
    Assignments,
    Calendar,
    Courses,
    Files,
    Grades,
    Settings,
}

/// What the frontend needs to render a term-scoped page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct TermPageContext {
    pub term: TermInfo,
    pub page: AppPage,
}

/// GET /app/v1/{term_slug}/{page}
/// Guard the term segment, then resolve the page render context.
pub async fn page_context(
    Path((raw_slug, raw_page)): Path<(String, String)>,
) -> Result<ResponseJson<ApiResponse<TermPageContext>>, ApiError> {
    let page: AppPage = raw_page
        .parse()
        .map_err(|_| ApiError::UnknownPage(raw_page))?;

    // Cheap syntax check before the full decode.
    if !term_slug::is_valid_slug(&raw_slug) {
        return Err(ApiError::InvalidTermSlug(raw_slug));
    }
    let term = term_slug::parse_slug(&raw_slug).ok_or(ApiError::InvalidTermSlug(raw_slug))?;

    tracing::debug!(term_id = %term.id, %page, all_terms = term.is_all_terms, "resolved term page");
    Ok(ResponseJson(ApiResponse::success(TermPageContext {
        term,
        page,
    })))
}

/// GET /app/v1/{term_slug}/{page}/{*rest}
/// Sub-pages share the same guard; the tail belongs to the page itself.
pub async fn nested_page_context(
    Path((raw_slug, raw_page, _rest)): Path<(String, String, String)>,
) -> Result<ResponseJson<ApiResponse<TermPageContext>>, ApiError> {
    page_context(Path((raw_slug, raw_page))).await
}

pub fn router() -> Router {
    Router::new()
        .route("/app/v1/{term_slug}/{page}", get(page_context))
        .route("/app/v1/{term_slug}/{page}/{*rest}", get(nested_page_context))
}
