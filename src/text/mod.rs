//! Text normalization and sentence segmentation.
//!
//! [`normalize`] produces the cleaned token stream the lexical scorer vectorizes.
//! [`split_sentences`] cuts raw text into evidence candidates for the semantic
//! scorer, which works on natural text and never sees normalized output.

mod stopwords;

#[cfg(test)]
mod tests;

pub use stopwords::is_stop_word;

use crate::constants::{FALLBACK_SNIPPET_CHARS, MIN_SENTENCE_CHARS};

/// Shortest token kept by [`normalize`].
pub const MIN_TOKEN_LEN: usize = 3;

/// Normalizes raw document text for lexical scoring.
///
/// Lower-cases, turns every character outside `[a-z0-9]` and whitespace into a
/// separator, then drops stop-words and tokens shorter than [`MIN_TOKEN_LEN`].
/// Surviving tokens are joined with single spaces.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() >= MIN_TOKEN_LEN && !is_stop_word(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits raw text into trimmed sentence-like segments.
///
/// A boundary is a whitespace run directly after `.`, `!` or `?`. Segments with
/// fewer than [`MIN_SENTENCE_CHARS`] characters are dropped; if nothing is left
/// the result is a single segment with the first [`FALLBACK_SNIPPET_CHARS`]
/// characters of `text`, so the result is never empty.
pub fn split_sentences(text: &str) -> Vec<String> {
    let sentences: Vec<String> = raw_segments(text)
        .into_iter()
        .map(str::trim)
        .filter(|segment| segment.chars().count() >= MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect();

    if sentences.is_empty() {
        return vec![truncate_chars(text, FALLBACK_SNIPPET_CHARS)];
    }

    sentences
}

/// Returns at most `max_chars` leading characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn raw_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            segments.push(&text[start..idx]);

            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }

            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    segments.push(&text[start..]);
    segments
}
