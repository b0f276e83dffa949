//! Character-safe string truncation for table cells.

/// Truncates `s` to at most `max_chars` characters, appending an ellipsis
/// when anything was cut. Operates on characters, never bytes, so multibyte
/// input cannot split a code point.
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}
