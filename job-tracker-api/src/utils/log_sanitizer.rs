//! Log truncation
//!
//! The list endpoint returns every record in one body; debug logs only keep
//! the head of it.

/// Maximum number of bytes kept in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Shorten a response body for logging.
///
/// Bodies within the limit come back unchanged. Longer ones are cut on a char
/// boundary and get a suffix with the full byte length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let head = &s[..floor_char_boundary(s, TRUNCATE_LIMIT)];
    format!("{head}... [truncated, total {} bytes]", s.len())
}
