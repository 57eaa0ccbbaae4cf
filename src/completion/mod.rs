//! Tab completion for command names and paths
//!
//! The first word on the line completes against executables on the search
//! path; every later word completes against the filesystem. Candidates are
//! computed once per Tab gesture and then cycled by [`CompletionState`].

mod command;
mod fs;
mod path;
mod state;

use std::ffi::OsString;

pub use command::command_suggestions;
pub use fs::{EntryInfo, FileSystem, HostFileSystem, MemoryFileSystem};
pub use path::path_suggestions;
pub use state::CompletionState;

use crate::editable::LineBuffer;

/// Source of completion candidates
pub trait Completer {
    /// Ordered candidates for the word `prefix`. `first_word` is true when
    /// the word is the command name.
    fn suggestions(&self, prefix: &str, first_word: bool) -> Vec<String>;
}

/// Completion over a filesystem and a search path
#[derive(Debug, Clone)]
pub struct CompletionEngine<F: FileSystem = HostFileSystem> {
    fs: F,
    search_path: OsString,
}

impl CompletionEngine<HostFileSystem> {
    /// Engine over the real filesystem and the current `PATH`
    pub fn from_env() -> Self {
        Self::new(
            HostFileSystem,
            std::env::var_os("PATH").unwrap_or_default(),
        )
    }
}

impl<F: FileSystem> CompletionEngine<F> {
    pub fn new(fs: F, search_path: impl Into<OsString>) -> Self {
        Self {
            fs,
            search_path: search_path.into(),
        }
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }
}

impl<F: FileSystem> Completer for CompletionEngine<F> {
    fn suggestions(&self, prefix: &str, first_word: bool) -> Vec<String> {
        if first_word {
            command_suggestions(&self.fs, &self.search_path, prefix)
        } else {
            path_suggestions(&self.fs, prefix)
        }
    }
}

/// Handle one Tab press.
///
/// Starts a cycle for the word before the cursor when none is active, then
/// splices the next candidate into `buffer`. Returns false (and leaves the
/// buffer untouched) when there are no candidates.
pub fn complete<C: Completer + ?Sized>(
    completer: &C,
    state: &mut CompletionState,
    buffer: &mut LineBuffer,
) -> bool {
    if !state.is_active() {
        let word = buffer.current_word();
        let first_word = buffer.is_first_word();
        let candidates = completer.suggestions(&word, first_word);
        tracing::debug!(
            word = %word,
            first_word,
            count = candidates.len(),
            "completion candidates"
        );
        if candidates.is_empty() {
            return false;
        }
        state.begin(candidates, buffer.word_start()..buffer.cursor());
    }

    state.apply_next(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CompletionEngine<MemoryFileSystem> {
        let fs = MemoryFileSystem::new()
            .with_home("/home/u")
            .with_dir(
                "/usr/bin",
                vec![
                    EntryInfo::file("cat", 0o755),
                    EntryInfo::file("cd", 0o755),
                    EntryInfo::file("config.txt", 0o644),
                    EntryInfo::dir("cache"),
                    EntryInfo::file("cp", 0o755),
                ],
            )
            .with_dir(
                "/bin",
                vec![EntryInfo::file("cat", 0o755), EntryInfo::file("chmod", 0o755)],
            )
            .with_dir(".", vec![EntryInfo::dir("crate"), EntryInfo::file("c.txt", 0o644)]);
        CompletionEngine::new(fs, "/usr/bin:/nonexistent:/bin")
    }

    #[test]
    fn test_command_suggestions_dedupe_in_path_order() {
        let engine = engine();
        assert_eq!(engine.suggestions("c", true), ["cat", "cd", "cp", "chmod"]);
    }

    #[test]
    fn test_command_suggestions_skip_non_executables() {
        let engine = engine();
        assert_eq!(engine.suggestions("con", true), Vec::<String>::new());
        assert_eq!(engine.suggestions("cac", true), Vec::<String>::new());
    }

    #[test]
    fn test_later_words_complete_paths() {
        let engine = engine();
        assert_eq!(engine.suggestions("c", false), ["crate/", "c.txt"]);
    }

    #[test]
    fn test_complete_replaces_current_word() {
        let engine = engine();
        let mut state = CompletionState::new();
        let mut buf = LineBuffer::from_text("ls cr");

        assert!(complete(&engine, &mut state, &mut buf));
        assert_eq!(buf.text(), "ls crate/");
        assert_eq!(buf.cursor(), 9);
    }

    #[test]
    fn test_complete_without_candidates_is_noop() {
        let engine = engine();
        let mut state = CompletionState::new();
        let mut buf = LineBuffer::from_text("zz");

        assert!(!complete(&engine, &mut state, &mut buf));
        assert_eq!(buf.text(), "zz");
        assert!(!state.is_active());
    }

    #[test]
    fn test_complete_mid_line_keeps_tail() {
        let engine = engine();
        let mut state = CompletionState::new();
        let mut buf = LineBuffer::from_text("ch file");
        for _ in 0..5 {
            buf.move_left();
        }

        assert!(complete(&engine, &mut state, &mut buf));
        assert_eq!(buf.text(), "chmod file");
        assert_eq!(buf.cursor(), 5);
    }
}
