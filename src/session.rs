//! The interactive read loop.
//!
//! A [`Session`] lives for the whole program run and owns the command
//! [`History`]. Each call to [`Session::read_outcome`] edits one line:
//!
//! ```text
//! byte → Key ─┬─ Enter / Ctrl-C / Ctrl-D(empty)  → LineOutcome
//!             ├─ Backspace / Ctrl-D / printable  → LineBuffer
//!             ├─ Tab                             → completion → LineBuffer
//!             └─ Esc → EditingCommand            → LineBuffer / History
//!                                 (re-render after every non-terminal key)
//! ```
//!
//! Raw mode is held by a [`RawModeGuard`] for the duration of one line. When
//! it cannot be entered the session degrades to a canonical-mode line read
//! without editing, history or completion.

use std::io::{self, BufRead, Write};

use crate::completion::{complete, Completer, CompletionEngine, CompletionState};
use crate::editable::{History, LineBuffer};
use crate::keymap::{decode_escape, read_key, EditingCommand, Key};
use crate::render::{Prompt, Renderer};
use crate::terminal::{HostTerminal, RawModeGuard, Terminal};

/// Returned by [`Session::read_line`] when the user pressed Ctrl-D on an
/// empty line
pub const EXIT_SENTINEL: &str = "exit";

/// How editing a line ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Enter was pressed
    Submitted(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D on an empty line
    ExitRequested,
    /// Input closed or failed; carries whatever had been typed
    Closed(String),
}

impl LineOutcome {
    /// Collapse to the plain string contract: the line, `""` for Ctrl-C,
    /// [`EXIT_SENTINEL`] for Ctrl-D, or the partial text on a closed stream
    pub fn into_text(self) -> String {
        match self {
            LineOutcome::Submitted(text) | LineOutcome::Closed(text) => text,
            LineOutcome::Interrupted => String::new(),
            LineOutcome::ExitRequested => EXIT_SENTINEL.to_string(),
        }
    }
}

/// Line editor state that outlives individual lines
#[derive(Debug)]
pub struct Session<C: Completer = CompletionEngine> {
    history: History,
    completer: C,
    renderer: Renderer,
}

impl<C: Completer> Session<C> {
    pub fn new(completer: C, history: History, renderer: Renderer) -> Self {
        Self {
            history,
            completer,
            renderer,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Read one line from the process terminal as a plain string
    pub fn read_line(&mut self, prompt: &Prompt) -> String {
        self.read_outcome(prompt).into_text()
    }

    /// Read one line from the process terminal
    pub fn read_outcome(&mut self, prompt: &Prompt) -> LineOutcome {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.read_with(&mut HostTerminal, &mut stdin.lock(), &mut stdout.lock(), prompt)
    }

    /// Read one line using `terminal` for mode switching. Falls back to
    /// [`Session::read_basic`] when raw mode is unavailable.
    pub fn read_with<T, R, W>(
        &mut self,
        terminal: &mut T,
        input: &mut R,
        output: &mut W,
        prompt: &Prompt,
    ) -> LineOutcome
    where
        T: Terminal,
        R: BufRead,
        W: Write,
    {
        let _guard = match RawModeGuard::enter(terminal) {
            Ok(guard) => guard,
            Err(e) => {
                tracing::warn!("Failed to enter raw mode ({}), falling back to basic input", e);
                return self.read_basic(input, output, prompt);
            }
        };

        self.edit_line(input, output, prompt)
    }

    /// Canonical-mode fallback: the terminal does the editing, the line is
    /// trimmed, and nothing is recorded in history
    pub fn read_basic<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
        prompt: &Prompt,
    ) -> LineOutcome {
        if let Err(e) = self.renderer.render_basic_prompt(output, prompt) {
            tracing::debug!("failed to write prompt: {}", e);
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => LineOutcome::Closed(String::new()),
            Ok(_) => LineOutcome::Submitted(line.trim().to_string()),
            Err(e) => {
                tracing::warn!("failed to read input: {}", e);
                LineOutcome::Closed(line.trim().to_string())
            }
        }
    }

    /// The raw-mode editing loop. `input` must already deliver unbuffered,
    /// unechoed bytes.
    pub fn edit_line<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
        prompt: &Prompt,
    ) -> LineOutcome {
        let mut buffer = LineBuffer::new();
        let mut completion = CompletionState::new();

        if let Err(e) = self.renderer.render(output, prompt, &buffer) {
            tracing::warn!("failed to draw prompt: {}", e);
            return LineOutcome::Closed(buffer.text());
        }

        loop {
            let key = match read_key(input) {
                Ok(Some(key)) => key,
                Ok(None) => {
                    tracing::debug!("input closed while editing");
                    return LineOutcome::Closed(buffer.text());
                }
                Err(e) => {
                    tracing::warn!("failed to read input: {}", e);
                    return LineOutcome::Closed(buffer.text());
                }
            };

            if key != Key::Tab {
                completion.reset();
            }

            match key {
                Key::Enter => {
                    self.finish(output, "");
                    let text = buffer.text();
                    self.history.add(&text);
                    return LineOutcome::Submitted(text);
                }
                Key::Interrupt => {
                    self.finish(output, "^C");
                    return LineOutcome::Interrupted;
                }
                Key::EndOfInput if buffer.is_empty() => {
                    self.finish(output, "");
                    return LineOutcome::ExitRequested;
                }
                Key::EndOfInput => {
                    buffer.delete_forward();
                }
                Key::Backspace => {
                    buffer.delete_backward();
                }
                Key::Tab => {
                    complete(&self.completer, &mut completion, &mut buffer);
                }
                Key::Escape => {
                    let command = decode_escape(input);
                    self.apply(command, &mut buffer);
                }
                Key::Char(ch) => buffer.insert(ch),
                Key::Other(_) => {}
            }

            if let Err(e) = self.renderer.render(output, prompt, &buffer) {
                tracing::warn!("failed to redraw line: {}", e);
                return LineOutcome::Closed(buffer.text());
            }
        }
    }

    /// Apply a decoded escape sequence
    fn apply(&mut self, command: EditingCommand, buffer: &mut LineBuffer) {
        match command {
            EditingCommand::MoveLeft => {
                buffer.move_left();
            }
            EditingCommand::MoveRight => {
                buffer.move_right();
            }
            EditingCommand::Home => buffer.move_home(),
            EditingCommand::End => buffer.move_end(),
            EditingCommand::DeleteForward => {
                buffer.delete_forward();
            }
            EditingCommand::HistoryPrev => {
                // At the oldest entry the line is left as typed
                let entry = self.history.previous();
                if !entry.is_empty() {
                    buffer.set_text(&entry);
                }
            }
            EditingCommand::HistoryNext => {
                // Past the newest entry this clears the line
                let entry = self.history.next();
                buffer.set_text(&entry);
            }
            EditingCommand::Unrecognized => {}
        }
    }

    fn finish<W: Write>(&self, output: &mut W, marker: &str) {
        if let Err(e) = self.renderer.finish_line(output, marker) {
            tracing::debug!("failed to end line: {}", e);
        }
    }
}
