//! Line editing state for the interactive reader.
//!
//! - [`LineBuffer`]: the characters of the line being typed plus the cursor
//! - [`History`]: previously submitted lines and the up/down navigation index
//!
//! # Example
//!
//! ```
//! use trash::editable::{History, LineBuffer};
//!
//! let mut line = LineBuffer::new();
//! for ch in "ls -l".chars() {
//!     line.insert(ch);
//! }
//! line.move_home();
//! line.delete_forward();
//! assert_eq!(line.text(), "s -l");
//!
//! let mut history = History::new();
//! history.add("ls -l");
//! assert_eq!(history.previous(), "ls -l");
//! ```

mod buffer;
mod history;

pub use buffer::LineBuffer;
pub use history::{History, DEFAULT_HISTORY_SIZE};
