// Output formatting — terminal display and the renderer's JSON payload.

pub mod payload;
pub mod terminal;

/// Shorten a headline, description or graph word to `max_chars` characters
/// for a one-line listing, marking the cut with "...". Counts characters, not bytes,
/// so Cyrillic and accented headlines are cut cleanly.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
