//! Conditional request support
//!
//! Strong `ETag` generation from file bytes and `If-None-Match` evaluation.
//! A match means the client's cached copy is current and a 304 should be
//! returned instead of the body.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute the `ETag` for a file's content.
///
/// The tag combines content length and a content hash, quoted per RFC 9110,
/// e.g. `"5-a1b2c3d4e5f67890"`.
pub fn etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}-{:x}\"", content.len(), hasher.finish())
}

/// Evaluate an `If-None-Match` header against the current `ETag`.
///
/// Handles single tags, comma-separated lists, and the `*` wildcard. Returns
/// true when the client's copy matches and a 304 applies.
pub fn none_match(if_none_match: Option<&str>, current: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|tag| tag == current || tag == "*")
    })
}
