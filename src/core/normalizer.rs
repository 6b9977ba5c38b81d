use crate::core::stop_words::StopWords;

/// Normalize a raw document into its token sequence
///
/// Steps, in order:
/// 1. Lowercase
/// 2. Drop every character that is not `a-z`, `0-9` or whitespace
/// 3. Split on whitespace
/// 4. Drop stop-words
///
/// Tokens keep their left-to-right order. An empty result means the document
/// has no extractable content.
pub fn normalize(text: &str, stop_words: &StopWords) -> Vec<String> {
    let cleaned = clean_text(text);

    cleaned
        .split_whitespace()
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

/// Lowercase and strip non-alphanumeric characters in a single pass
///
/// Separators are folded into a plain space so `split_whitespace` sees them.
#[inline]
fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if is_separator(c) {
                Some(' ')
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}

/// Unicode whitespace plus the ASCII information separators (U+001C to U+001F)
#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
