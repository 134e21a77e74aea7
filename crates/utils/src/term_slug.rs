//! Conversion between academic terms and URL path segments.
//!
//! A term slug is `<sanitized-name>-<id>`, e.g. `fall-2025-abc123`: the
//! display name lowered to `[a-z0-9-]` followed by the term's opaque store
//! identifier. The pseudo-term "All Terms" (no term filter selected) is
//! encoded as the reserved [`ALL_TERMS_SLUG`], whose suffix is a frozen
//! constant so that every process renders the identical string.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Display name of the "All Terms" pseudo-term.
pub const ALL_TERMS_NAME: &str = "All Terms";

/// Identifier value standing in for "no specific term selected".
pub const ALL_TERMS_ID: &str = "all-terms";

/// The reserved slug for "All Terms". The suffix is a fixed literal, never
/// regenerated at runtime: server- and client-rendered markup must agree on
/// this string at first paint.
pub const ALL_TERMS_SLUG: &str = "term-0-u5urh3fps";

/// Any valid slug starting with this prefix decodes to the "All Terms"
/// identity, whatever its literal suffix.
pub const ALL_TERMS_SLUG_PREFIX: &str = "term-0";

/// Two hyphen-separated alphanumeric-or-hyphen groups. The greedy first
/// group makes the last hyphen the name/id split point.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9-]+)-([a-zA-Z0-9-]+)$").expect("slug pattern"));

#[derive(Debug, Error, PartialEq)]
pub enum TermSlugError {
    #[error("no term provided and fallback disabled")]
    MissingTerm,
}

/// An academic term as handed to us by the term store. This crate only reads
/// it; creation and lifecycle belong to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Term {
    pub name: String,
    pub id: String,
}

/// The decoded identity of a term slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct TermInfo {
    pub name: String,
    pub id: String,
    pub is_all_terms: bool,
}

impl TermInfo {
    /// The fixed identity every reserved-prefix slug decodes to.
    pub fn all_terms() -> Self {
        Self {
            name: ALL_TERMS_NAME.to_string(),
            id: ALL_TERMS_ID.to_string(),
            is_all_terms: true,
        }
    }
}

/// Encode a term's display name and identifier into a URL path segment.
///
/// The name is lowercased, stripped to `[a-z0-9\s-]`, and separator runs
/// collapse to single hyphens. A term whose identifier is [`ALL_TERMS_ID`],
/// or whose name contains "all terms" in any case, encodes to the reserved
/// [`ALL_TERMS_SLUG`] regardless of the rest of the name.
///
/// For any non-empty name the output satisfies [`is_valid_slug`].
pub fn generate_slug(name: &str, id: &str) -> String {
    if id == ALL_TERMS_ID || name.to_lowercase().contains("all terms") {
        return ALL_TERMS_SLUG.to_string();
    }

    let mut sanitized = sanitize_name(name);
    if sanitized.is_empty() {
        // Nothing representable survived (e.g. "!!!"); keep the slug
        // grammar intact with a fixed token.
        sanitized.push_str("term");
    }

    // Composite store keys arrive as `<table>|<key>`; the slug carries only
    // the part after the separator.
    let id_part = match id.rsplit_once('|') {
        Some((_, tail)) => tail,
        None => id,
    };

    format!("{sanitized}-{id_part}")
}

/// Decode a slug back into a best-effort display name plus the identifier.
///
/// Returns `None` for anything that fails the slug grammar. A valid slug
/// starting with [`ALL_TERMS_SLUG_PREFIX`] short-circuits to the fixed
/// "All Terms" identity. Otherwise the name portion is rebuilt by splitting
/// on hyphens and uppercasing only the first letter of each word; casing a
/// hand-crafted slug smuggled past [`generate_slug`] is preserved.
pub fn parse_slug(slug: &str) -> Option<TermInfo> {
    let caps = SLUG_RE.captures(slug)?;

    if slug.starts_with(ALL_TERMS_SLUG_PREFIX) {
        return Some(TermInfo::all_terms());
    }

    let name = caps[1]
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ");

    Some(TermInfo {
        name,
        id: caps[2].to_string(),
        is_all_terms: false,
    })
}

/// Cheap syntax pre-check used by the routing layer before a full decode.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Slug for the given term, or the "All Terms" slug when no term is
/// selected and `fallback_to_all` allows it.
///
/// # Errors
///
/// [`TermSlugError::MissingTerm`] when `term` is `None` and the fallback is
/// disabled. That is a caller bug surfaced during development, not a
/// recoverable runtime condition.
pub fn slug_from_term(term: Option<&Term>, fallback_to_all: bool) -> Result<String, TermSlugError> {
    match term {
        Some(term) => Ok(generate_slug(&term.name, &term.id)),
        None if fallback_to_all => Ok(all_terms_slug()),
        None => Err(TermSlugError::MissingTerm),
    }
}

/// The reserved "All Terms" slug. Stable across calls and processes.
pub fn all_terms_slug() -> String {
    generate_slug(ALL_TERMS_NAME, ALL_TERMS_ID)
}

/// Whether a slug decodes to the "All Terms" identity. Unparseable input is
/// simply `false`, never an error.
pub fn is_all_terms_slug(slug: &str) -> bool {
    parse_slug(slug).is_some_and(|info| info.is_all_terms)
}

/// Lowercase, keep `[a-z0-9]`, turn whitespace/hyphen runs into single
/// hyphens, drop everything else, trim hyphens at both ends.
fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            out.push(ch);
            pending_separator = false;
        } else if ch == '-' || ch.is_whitespace() {
            pending_separator = true;
        }
        // Any other character is stripped without leaving a separator.
    }

    out
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_slugs_pass_validation() {
        for (name, id) in [
            ("Fall 2025", "abc123"),
            ("Spring Semester", "x"),
            ("Winter '26", "0f9a"),
            ("Término Uno", "zzz"),
        ] {
            let slug = generate_slug(name, id);
            assert!(is_valid_slug(&slug), "{slug:?} should be valid");
        }
    }

    #[test]
    fn sanitizes_punctuation_whitespace_and_case() {
        assert_eq!(generate_slug("CS 101: Intro!!", "xyz"), "cs-101-intro-xyz");
        assert_eq!(generate_slug("  Fall   2025  ", "abc"), "fall-2025-abc");
        assert_eq!(generate_slug("a --- b", "id1"), "a-b-id1");
    }

    #[test]
    fn name_with_nothing_representable_still_yields_a_valid_slug() {
        let slug = generate_slug("!!!", "abc");
        assert_eq!(slug, "term-abc");
        assert!(is_valid_slug(&slug));
    }

    #[test]
    fn composite_identifier_keeps_only_the_part_after_the_separator() {
        assert_eq!(generate_slug("Fall 2025", "terms|abc123"), "fall-2025-abc123");
    }

    #[test]
    fn sentinel_id_encodes_to_the_reserved_slug() {
        assert_eq!(generate_slug("Whatever", ALL_TERMS_ID), ALL_TERMS_SLUG);
    }

    #[test]
    fn name_containing_all_terms_encodes_to_the_reserved_slug() {
        assert_eq!(generate_slug("ALL TERMS view", "xyz"), ALL_TERMS_SLUG);
        assert_eq!(generate_slug("my all terms page", "xyz"), ALL_TERMS_SLUG);
    }

    #[test]
    fn all_terms_slug_is_deterministic() {
        assert_eq!(all_terms_slug(), all_terms_slug());
        assert_eq!(all_terms_slug(), ALL_TERMS_SLUG);
    }

    #[test]
    fn all_terms_slug_round_trips() {
        assert!(is_all_terms_slug(&all_terms_slug()));
        assert!(is_valid_slug(ALL_TERMS_SLUG));
        assert_eq!(parse_slug(ALL_TERMS_SLUG), Some(TermInfo::all_terms()));
    }

    #[test]
    fn parses_a_plain_slug() {
        assert_eq!(
            parse_slug("fall-2025-abc123"),
            Some(TermInfo {
                name: "Fall 2025".to_string(),
                id: "abc123".to_string(),
                is_all_terms: false,
            })
        );
    }

    #[test]
    fn rejects_text_that_is_not_a_slug() {
        assert_eq!(parse_slug("not a slug"), None);
        assert_eq!(parse_slug(""), None);
        assert_eq!(parse_slug("single"), None);
        assert_eq!(parse_slug("-abc"), None);
        assert_eq!(parse_slug("abc-"), None);
        assert!(!is_valid_slug("under_score-id"));
    }

    #[test]
    fn hyphenated_name_splits_on_the_last_hyphen() {
        let slug = generate_slug("Spring-Summer 2025", "xyz");
        assert_eq!(slug, "spring-summer-2025-xyz");
        let info = parse_slug(&slug).unwrap();
        assert_eq!(info.name, "Spring Summer 2025");
        assert_eq!(info.id, "xyz");
    }

    #[test]
    fn reserved_prefix_wins_over_the_captured_groups() {
        let info = parse_slug("term-0-u5urh3fps").unwrap();
        assert!(info.is_all_terms);
        assert_eq!(info.name, ALL_TERMS_NAME);
        assert_eq!(info.id, ALL_TERMS_ID);

        // Prefix detection ignores the suffix entirely.
        assert!(is_all_terms_slug("term-0-anything"));
    }

    #[test]
    fn is_all_terms_slug_is_false_for_garbage() {
        assert!(!is_all_terms_slug("fall-2025-abc"));
        assert!(!is_all_terms_slug("not a slug"));
        assert!(!is_all_terms_slug(""));
    }

    #[test]
    fn hand_crafted_casing_survives_name_reconstruction() {
        let info = parse_slug("fALL-2025-x").unwrap();
        assert_eq!(info.name, "FALL 2025");
        assert_eq!(info.id, "x");
    }

    #[test]
    fn round_trip_is_lossy_but_stable() {
        let slug = generate_slug("Fall 2025 (Final)", "abc");
        assert_eq!(slug, "fall-2025-final-abc");
        let info = parse_slug(&slug).unwrap();
        // Parentheses were stripped during sanitization; the reconstruction
        // is the degraded name, identically every time.
        assert_eq!(info.name, "Fall 2025 Final");
        assert_eq!(info.id, "abc");
        assert_eq!(parse_slug(&slug).unwrap().name, info.name);
    }

    #[test]
    fn slug_from_term_uses_the_term_when_present() {
        let term = Term {
            name: "Fall 2025".to_string(),
            id: "abc".to_string(),
        };
        assert_eq!(slug_from_term(Some(&term), false).unwrap(), "fall-2025-abc");
        assert_eq!(slug_from_term(Some(&term), true).unwrap(), "fall-2025-abc");
    }

    #[test]
    fn slug_from_term_falls_back_or_fails_without_a_term() {
        assert_eq!(slug_from_term(None, true).unwrap(), all_terms_slug());
        assert_eq!(slug_from_term(None, false), Err(TermSlugError::MissingTerm));
        assert_eq!(
            TermSlugError::MissingTerm.to_string(),
            "no term provided and fallback disabled"
        );
    }
}
