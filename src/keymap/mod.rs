//! Raw-mode input decoding
//!
//! ```text
//! byte stream → read_key() → Key
//!                              └─ Key::Escape → decode_escape() → EditingCommand
//! ```
//!
//! Printable keys insert text, control keys map to line operations, and escape
//! sequences are resolved by a small state machine so the terminal protocol
//! can be tested without a terminal.

mod escape;
mod reader;
mod types;

pub use escape::{decode_escape, EditingCommand};
pub use reader::{read_byte, read_key};
pub use types::{
    Key, KEY_BACKSPACE, KEY_CTRL_C, KEY_CTRL_D, KEY_ENTER, KEY_ESCAPE, KEY_TAB,
};
