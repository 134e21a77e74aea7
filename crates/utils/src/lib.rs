//! Shared building blocks: the term-slug codec and the API response envelope.

pub mod response;
pub mod term_slug;
