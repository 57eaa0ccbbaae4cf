//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::{self, BufReader, Cursor, Read};

use trash::completion::{CompletionEngine, EntryInfo, MemoryFileSystem};
use trash::editable::History;
use trash::render::{Prompt, Renderer};
use trash::terminal::Terminal;
use trash::theme::Palette;
use trash::{LineOutcome, Session};

pub type TestSession = Session<CompletionEngine<MemoryFileSystem>>;

/// Filesystem with a small search path, a home directory and a working
/// directory
pub fn test_filesystem() -> MemoryFileSystem {
    MemoryFileSystem::new()
        .with_home("/home/u")
        .with_dir(
            "/usr/bin",
            vec![
                EntryInfo::file("cat", 0o755),
                EntryInfo::file("cd", 0o755),
                EntryInfo::file("cp", 0o755),
                EntryInfo::file("cfg.txt", 0o644),
                EntryInfo::file("ls", 0o755),
            ],
        )
        .with_dir(
            ".",
            vec![
                EntryInfo::file("srv.txt", 0o644),
                EntryInfo::dir("src"),
                EntryInfo::file(".secret", 0o644),
            ],
        )
        .with_dir(
            "/home/u",
            vec![EntryInfo::dir("Documents"), EntryInfo::dir("Downloads")],
        )
}

pub fn test_session() -> TestSession {
    Session::new(
        CompletionEngine::new(test_filesystem(), "/usr/bin"),
        History::new(),
        Renderer::new(Palette::plain()),
    )
}

pub fn prompt() -> Prompt {
    Prompt::new("$")
}

/// Edit one line from `bytes` in raw mode and return the outcome with
/// everything written to the terminal
pub fn edit(session: &mut TestSession, bytes: &[u8]) -> (LineOutcome, String) {
    let mut output = Vec::new();
    let outcome = session.edit_line(&mut Cursor::new(bytes.to_vec()), &mut output, &prompt());
    (outcome, String::from_utf8_lossy(&output).into_owned())
}

/// Terminal that records mode switches
#[derive(Debug, Default)]
pub struct FakeTerminal {
    pub raw: bool,
    pub enables: usize,
    pub disables: usize,
    pub refuse_raw_mode: bool,
}

impl FakeTerminal {
    pub fn refusing() -> Self {
        Self {
            refuse_raw_mode: true,
            ..Self::default()
        }
    }
}

impl Terminal for FakeTerminal {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        if self.refuse_raw_mode {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "not a tty"));
        }
        self.raw = true;
        self.enables += 1;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        self.raw = false;
        self.disables += 1;
        Ok(())
    }
}

/// Delivers `bytes`, then fails every read with `BrokenPipe`
#[derive(Debug)]
pub struct BreaksAfter {
    bytes: Cursor<Vec<u8>>,
}

impl BreaksAfter {
    pub fn new(bytes: &[u8]) -> BufReader<Self> {
        BufReader::new(Self {
            bytes: Cursor::new(bytes.to_vec()),
        })
    }
}

impl Read for BreaksAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.bytes.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::BrokenPipe, "input went away")),
            n => Ok(n),
        }
    }
}
