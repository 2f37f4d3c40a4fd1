//! Text field state for the "open file" prompt.

use crate::domain::upload::normalize_dropped_path;

/// Editable path with a byte-offset cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInputState {
    input: String,
    cursor: usize,
}

impl FileInputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the prompt pre-filled with `value`, cursor at the end.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = value.into();
        let cursor = input.len();
        Self { input, cursor }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts a character at the cursor.
    pub fn type_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.input[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.input.remove(prev);
        self.cursor = prev;
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.input[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor = self.input[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.input.len(), |(i, _)| self.cursor + i);
        }
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Replaces the content with a pasted or dropped path.
    pub fn paste(&mut self, text: &str) {
        self.input = normalize_dropped_path(text);
        self.cursor = self.input.len();
    }
}
