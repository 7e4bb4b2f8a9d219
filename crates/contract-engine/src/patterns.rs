//! Text position helpers shared by the segmenter and detector
//!
//! Regex matches report byte offsets; results expose character offsets so
//! they stay meaningful for non-ASCII contracts.

use contract_types::TextPosition;

/// Characters of context kept on each side of a red-flag match
pub const CONTEXT_CHARS: usize = 50;

/// Character offset of the byte offset `byte` in `text`
pub fn char_offset(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

/// Convert a byte range of a match into a character-based [`TextPosition`]
pub fn find_text_position(text: &str, start: usize, end: usize) -> TextPosition {
    let start_offset = char_offset(text, start);
    TextPosition {
        start_offset,
        end_offset: start_offset + text[start..end].chars().count(),
    }
}

/// Slice of `text` covering up to `radius` characters either side of the
/// byte range `start..end`, clamped to the text bounds
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);

    &text[from..to]
}

/// Extract a trimmed snippet around a match, wrapped in ellipses
pub fn extract_snippet(text: &str, start: usize, end: usize) -> String {
    let snippet = context_window(text, start, end, CONTEXT_CHARS);
    format!("...{}...", snippet.trim())
}

/// Converts increasing byte offsets to character offsets in one pass
pub(crate) struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Character offset of `byte`, which must not precede the previous call
    pub(crate) fn advance_to(&mut self, byte: usize) -> usize {
        debug_assert!(byte >= self.byte);
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
