//! Raw terminal mode as a scoped resource.
//!
//! [`RawModeGuard`] enables raw mode when created and restores the previous
//! mode when dropped, so every exit path out of the read loop (submit, abort,
//! stream error, panic unwind) puts the terminal back.

use std::io::{self, IsTerminal};

/// Switches the controlling terminal in and out of raw mode
pub trait Terminal {
    /// Enter raw (non-canonical, non-echoing) mode. On error the terminal must
    /// be left unchanged.
    fn enable_raw_mode(&mut self) -> io::Result<()>;

    /// Restore the mode that was active before [`Terminal::enable_raw_mode`]
    fn disable_raw_mode(&mut self) -> io::Result<()>;
}

/// The process terminal, driven through crossterm
#[derive(Debug, Clone, Copy, Default)]
pub struct HostTerminal;

impl Terminal for HostTerminal {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        // crossterm falls back to /dev/tty when stdin is redirected; editing
        // a pipe makes no sense, so refuse instead
        if !io::stdin().is_terminal() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdin is not a terminal",
            ));
        }
        crossterm::terminal::enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }
}

/// Holds raw mode for its lifetime
#[derive(Debug)]
pub struct RawModeGuard<'a, T: Terminal> {
    terminal: &'a mut T,
}

impl<'a, T: Terminal> RawModeGuard<'a, T> {
    /// Enter raw mode. Nothing needs restoring if this fails.
    pub fn enter(terminal: &'a mut T) -> io::Result<Self> {
        terminal.enable_raw_mode()?;
        tracing::trace!("raw mode enabled");
        Ok(Self { terminal })
    }
}

impl<T: Terminal> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        match self.terminal.disable_raw_mode() {
            Ok(()) => tracing::trace!("raw mode restored"),
            Err(e) => tracing::warn!("failed to restore terminal mode: {}", e),
        }
    }
}
