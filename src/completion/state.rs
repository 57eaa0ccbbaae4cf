//! Tab-cycling state between consecutive completion presses.

use std::ops::Range;

use crate::editable::LineBuffer;

/// Candidates computed on the first Tab press and the span they replace.
///
/// Repeated presses walk through `candidates` modulo their length. Any other
/// key must call [`CompletionState::reset`] so the next Tab recomputes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionState {
    candidates: Vec<String>,
    cycle_index: usize,
    anchor: Range<usize>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a cycle is in progress
    pub fn is_active(&self) -> bool {
        !self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Character span of the word the active candidate occupies
    pub fn anchor(&self) -> Range<usize> {
        self.anchor.clone()
    }

    /// Start a new cycle replacing `anchor`
    pub fn begin(&mut self, candidates: Vec<String>, anchor: Range<usize>) {
        self.candidates = candidates;
        self.cycle_index = 0;
        self.anchor = anchor;
    }

    pub fn reset(&mut self) {
        self.candidates.clear();
        self.cycle_index = 0;
        self.anchor = 0..0;
    }

    /// Replace the anchored word with the next candidate.
    /// Returns false when there is nothing to cycle through.
    pub fn apply_next(&mut self, buffer: &mut LineBuffer) -> bool {
        if self.candidates.is_empty() {
            return false;
        }

        let candidate = &self.candidates[self.cycle_index % self.candidates.len()];
        buffer.replace(self.anchor.clone(), candidate);

        let start = self.anchor.start;
        self.anchor = start..start + candidate.chars().count();
        self.cycle_index += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_and_wraps() {
        let mut buf = LineBuffer::from_text("c");
        let mut state = CompletionState::new();
        state.begin(vec!["cat".into(), "cd".into(), "cp".into()], 0..1);

        let mut seen = Vec::new();
        for _ in 0..4 {
            assert!(state.apply_next(&mut buf));
            seen.push(buf.text());
        }
        assert_eq!(seen, ["cat", "cd", "cp", "cat"]);
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_anchor_tracks_candidate_length() {
        let mut buf = LineBuffer::from_text("ls ~/Do");
        let mut state = CompletionState::new();
        state.begin(vec!["~/Documents/".into(), "~/Dockerfile".into()], 3..7);

        state.apply_next(&mut buf);
        assert_eq!(buf.text(), "ls ~/Documents/");
        assert_eq!(state.anchor(), 3..15);

        state.apply_next(&mut buf);
        assert_eq!(buf.text(), "ls ~/Dockerfile");
    }

    #[test]
    fn test_reset_clears_cycle() {
        let mut state = CompletionState::new();
        state.begin(vec!["a".into()], 0..0);
        assert!(state.is_active());
        state.reset();
        assert!(!state.is_active());
        assert!(!state.apply_next(&mut LineBuffer::new()));
    }
}
