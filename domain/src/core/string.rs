//! String utilities for the domain layer.

/// Marker appended to text cut by [`truncate_with_ellipsis`].
pub const ELLIPSIS: &str = "...";

/// Keep the first `limit` characters of `s`, followed by [`ELLIPSIS`].
///
/// Counts Unicode scalar values, not bytes, so multibyte text is never split.
/// Text of at most `limit` characters is returned unchanged. The marker is
/// appended after the kept prefix, so a truncated result is `limit + 3`
/// characters long.
pub fn truncate_with_ellipsis(s: &str, limit: usize) -> String {
    match s.char_indices().nth(limit) {
        Some((end, _)) => format!("{}{}", &s[..end], ELLIPSIS),
        None => s.to_string(),
    }
}
