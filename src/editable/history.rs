//! Command history with up/down navigation.

/// Default number of entries kept before the oldest are dropped
pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// Ordered log of submitted lines plus a navigation index.
///
/// `index == entries.len()` means "past the newest entry". Navigation never
/// wraps: at either boundary the lookup returns an empty string and leaves the
/// index where it is.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    index: usize,
    max_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_SIZE)
    }

    /// Create a history that keeps at most `max_size` entries
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            max_size: max_size.max(1),
        }
    }

    /// Record a submitted line. Blank lines are ignored.
    pub fn add(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.entries.push(line.to_string());

        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
        }

        self.index = self.entries.len();
        tracing::trace!(entries = self.entries.len(), "history entry added");
    }

    /// Step towards older entries (Up arrow)
    pub fn previous(&mut self) -> String {
        if self.entries.is_empty() || self.index == 0 {
            return String::new();
        }
        self.index -= 1;
        self.entries[self.index].clone()
    }

    /// Step towards newer entries (Down arrow).
    ///
    /// Returns an empty string at the newest entry; callers that overwrite the
    /// line with the result clear it.
    pub fn next(&mut self) -> String {
        if self.entries.is_empty() || self.index + 1 >= self.entries.len() {
            return String::new();
        }
        self.index += 1;
        self.entries[self.index].clone()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current navigation index (`len()` when past the newest entry)
    pub fn index(&self) -> usize {
        self.index
    }
}
