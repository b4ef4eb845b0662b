//! Search box editing (pure state transitions).
//!
//! The cursor counts characters, not bytes; edits convert to byte
//! offsets at the boundary so multi-byte input stays intact. All
//! functions are pure - no side effects, testable without TUI.

/// Editable search box contents with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    /// Current query text, raw and untokenized.
    pub text: String,
    /// Cursor position in characters, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl SearchBox {
    /// Box pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Whether the box holds no effective query (empty or whitespace).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Insert a character at the cursor and advance past it.
#[must_use]
pub fn insert_char(mut input: SearchBox, ch: char) -> SearchBox {
    let at = byte_offset(&input.text, input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor, if any.
#[must_use]
pub fn backspace(mut input: SearchBox) -> SearchBox {
    if input.cursor > 0 {
        let at = byte_offset(&input.text, input.cursor - 1);
        input.text.remove(at);
        input.cursor -= 1;
    }
    input
}

/// Move the cursor one character left. Saturates at the start.
#[must_use]
pub fn cursor_left(mut input: SearchBox) -> SearchBox {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move the cursor one character right. Saturates at the end.
#[must_use]
pub fn cursor_right(mut input: SearchBox) -> SearchBox {
    let max_cursor = input.text.chars().count();
    input.cursor = (input.cursor + 1).min(max_cursor);
    input
}

/// Byte offset of character index `cursor`, clamped to the end.
fn byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_tests.rs"]
mod tests;
