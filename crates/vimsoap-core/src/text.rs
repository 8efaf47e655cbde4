//! Text helpers shared by the decoding crates.

/// Shorten `s` to at most `max` characters, marking the cut with `...`.
///
/// The cut always lands on a char boundary, so multi-byte text is safe.
pub fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
