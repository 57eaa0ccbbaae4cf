//! Raw terminal input codes and the keys they decode to.

use std::fmt;

pub const KEY_CTRL_C: u8 = 3;
pub const KEY_CTRL_D: u8 = 4;
pub const KEY_TAB: u8 = 9;
pub const KEY_ENTER: u8 = 13;
pub const KEY_ESCAPE: u8 = 27;
pub const KEY_BACKSPACE: u8 = 127;

/// One decoded unit of raw-mode input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    /// Ctrl-C
    Interrupt,
    /// Ctrl-D
    EndOfInput,
    Backspace,
    Tab,
    /// Start of an escape sequence; the rest is read by the escape decoder
    Escape,
    /// A printable character (possibly multi-byte UTF-8)
    Char(char),
    /// Any other control byte or an undecodable byte
    Other(u8),
}

impl Key {
    /// Classify a single-byte input. Multi-byte UTF-8 is assembled by
    /// [`super::read_key`] before classification.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            KEY_ENTER => Key::Enter,
            KEY_CTRL_C => Key::Interrupt,
            KEY_CTRL_D => Key::EndOfInput,
            KEY_BACKSPACE => Key::Backspace,
            KEY_TAB => Key::Tab,
            KEY_ESCAPE => Key::Escape,
            b if b.is_ascii_control() => Key::Other(b),
            b if b.is_ascii() => Key::Char(b as char),
            b => Key::Other(b),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Enter => write!(f, "Enter"),
            Key::Interrupt => write!(f, "Ctrl+C"),
            Key::EndOfInput => write!(f, "Ctrl+D"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Tab => write!(f, "Tab"),
            Key::Escape => write!(f, "Escape"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Other(b) => write!(f, "0x{:02x}", b),
        }
    }
}
