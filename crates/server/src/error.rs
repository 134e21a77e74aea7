//! API error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use utils::{response::ApiResponse, term_slug::TermSlugError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown app page: {0}")]
    UnknownPage(String),
    #[error("invalid term slug: {0}")]
    InvalidTermSlug(String),
    #[error(transparent)]
    TermSlug(#[from] TermSlugError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnknownPage(_) | ApiError::InvalidTermSlug(_) => StatusCode::NOT_FOUND,
            ApiError::TermSlug(TermSlugError::MissingTerm) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(%status, error = %self, "request rejected");
        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
