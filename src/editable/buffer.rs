//! The text-and-cursor model for a single input line.
//!
//! `LineBuffer` stores characters (not bytes) so that cursor arithmetic stays
//! in visual units. Every mutation keeps `0 <= cursor <= len`; operations that
//! would violate it are no-ops and report that nothing happened.

use std::ops::Range;

/// Editable line with a cursor. Created per input line, discarded on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    content: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with the cursor at the end
    pub fn from_text(text: &str) -> Self {
        let content: Vec<char> = text.chars().collect();
        let cursor = content.len();
        Self { content, cursor }
    }

    /// Cursor offset in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Current content as a String
    pub fn text(&self) -> String {
        self.content.iter().collect()
    }

    /// Characters between the start of the line and the cursor
    pub fn before_cursor(&self) -> &[char] {
        &self.content[..self.cursor]
    }

    // =========================================================================
    // Insertion / deletion
    // =========================================================================

    /// Splice `ch` in at the cursor and advance past it
    pub fn insert(&mut self, ch: char) {
        self.content.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Backspace. Returns false when the cursor is already at column 0.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.content.remove(self.cursor - 1);
        self.cursor -= 1;
        true
    }

    /// Delete key. Returns false when the cursor is at the end of the line.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.content.remove(self.cursor);
        true
    }

    /// Replace the character range with `text`, leaving the cursor right
    /// after the inserted text. The range is clamped to the content.
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        let end = range.end.min(self.content.len());
        let start = range.start.min(end);
        let replacement: Vec<char> = text.chars().collect();
        let inserted = replacement.len();
        self.content.splice(start..end, replacement);
        self.cursor = start + inserted;
    }

    /// Replace everything, cursor at the end (history recall)
    pub fn set_text(&mut self, text: &str) {
        self.content = text.chars().collect();
        self.cursor = self.content.len();
    }

    // =========================================================================
    // Movement
    // =========================================================================

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    // =========================================================================
    // Word queries (used by completion)
    // =========================================================================

    /// Character offset where the word under the cursor starts.
    /// Words are separated by a plain space.
    pub fn word_start(&self) -> usize {
        self.before_cursor()
            .iter()
            .rposition(|&c| c == ' ')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// The partial word between the last space and the cursor
    pub fn current_word(&self) -> String {
        self.content[self.word_start()..self.cursor].iter().collect()
    }

    /// True while no space precedes the cursor, i.e. the command name is
    /// being typed
    pub fn is_first_word(&self) -> bool {
        !self.before_cursor().contains(&' ')
    }
}
