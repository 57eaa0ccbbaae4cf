//! trash - a small interactive shell
//!
//! The interesting part is the line editor: a raw-mode [`Session`] that
//! decodes keys and escape sequences, keeps an in-memory [`History`],
//! completes commands and paths on Tab and redraws a syntax-colored line
//! after every keystroke.
//!
//! [`History`]: editable::History

pub mod cli;
pub mod command;
pub mod completion;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod keymap;
pub mod render;
pub mod session;
pub mod terminal;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use command::ParsedCommand;
pub use completion::CompletionEngine;
pub use config::ShellConfig;
pub use render::{Prompt, Renderer};
pub use session::{LineOutcome, Session, EXIT_SENTINEL};
