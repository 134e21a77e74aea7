//! Rewrites legacy term-less app URLs onto the term-scoped scheme.

use std::sync::LazyLock;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use regex::Regex;
use utils::term_slug;

/// App paths from before term scoping: `/app/v1/<page>` with no term
/// segment. A term-scoped path never matches because its first segment is
/// followed by a hyphenated slug, not `/` or the end of the path.
static LEGACY_APP_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/app/v1/(dashboard|assignments|calendar|courses|files|grades|settings)(/.*)?$")
        .expect("legacy path pattern")
});

/// Redirect legacy app URLs to the same page scoped to "All Terms",
/// preserving any sub-path and the query string.
pub async fn legacy_term_redirect(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if let Some(caps) = LEGACY_APP_PATH.captures(path) {
        let slug = term_slug::all_terms_slug();
        let page = &caps[1];
        let tail = caps.get(2).map_or("", |m| m.as_str());
        let target = match request.uri().query() {
            Some(query) => format!("/app/v1/{slug}/{page}{tail}?{query}"),
            None => format!("/app/v1/{slug}/{page}{tail}"),
        };
        tracing::debug!(from = %path, to = %target, "redirecting legacy app path");
        return Redirect::temporary(&target).into_response();
    }

    next.run(request).await
}
