//! Conditional request module
//!
//! `ETag` generation and `If-None-Match` revalidation for served bodies.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Content `ETag`: body length plus a 64-bit content hash, quoted.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{}-{:x}\"", content.len(), hasher.finish())
}

/// True when the client's `If-None-Match` covers `etag` (answer 304).
///
/// Handles comma-separated lists and the `*` wildcard.
pub fn matches_if_none_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header.split(',').any(|candidate| {
            let candidate = candidate.trim();
            candidate == etag || candidate == "*"
        })
    })
}
