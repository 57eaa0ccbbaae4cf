//! Decoder for the CSI sequences terminals send for cursor and delete keys.
//!
//! Called after an ESC byte has been read. The recognized table (xterm/VT100):
//!
//! | Bytes after ESC | Command         |
//! |-----------------|-----------------|
//! | `[A`            | `HistoryPrev`   |
//! | `[B`            | `HistoryNext`   |
//! | `[C`            | `MoveRight`     |
//! | `[D`            | `MoveLeft`      |
//! | `[H`            | `Home`          |
//! | `[F`            | `End`           |
//! | `[3~`           | `DeleteForward` |
//!
//! Anything else, including a stream that closes or errors mid-sequence,
//! decodes to `Unrecognized`. The bytes consumed so far are swallowed.

use std::io::Read;

use super::reader::read_byte;

/// Meaning of a decoded escape sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditingCommand {
    MoveLeft,
    MoveRight,
    Home,
    End,
    DeleteForward,
    HistoryPrev,
    HistoryNext,
    Unrecognized,
}

/// Decoder state after the initial ESC
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// ESC seen, expecting `[`
    Escape,
    /// `ESC [` seen, expecting the final byte
    Csi,
    /// `ESC [ 3` seen, expecting `~`
    DeleteTilde,
}

/// Result of feeding one byte to the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Next(State),
    Done(EditingCommand),
}

impl State {
    fn feed(self, byte: u8) -> Step {
        match (self, byte) {
            (State::Escape, b'[') => Step::Next(State::Csi),
            (State::Escape, _) => Step::Done(EditingCommand::Unrecognized),

            (State::Csi, b'A') => Step::Done(EditingCommand::HistoryPrev),
            (State::Csi, b'B') => Step::Done(EditingCommand::HistoryNext),
            (State::Csi, b'C') => Step::Done(EditingCommand::MoveRight),
            (State::Csi, b'D') => Step::Done(EditingCommand::MoveLeft),
            (State::Csi, b'H') => Step::Done(EditingCommand::Home),
            (State::Csi, b'F') => Step::Done(EditingCommand::End),
            (State::Csi, b'3') => Step::Next(State::DeleteTilde),
            (State::Csi, _) => Step::Done(EditingCommand::Unrecognized),

            (State::DeleteTilde, b'~') => Step::Done(EditingCommand::DeleteForward),
            (State::DeleteTilde, _) => Step::Done(EditingCommand::Unrecognized),
        }
    }
}

/// Decode the remainder of an escape sequence from `input`.
///
/// Reads at most three bytes. Never fails: read errors and end of stream
/// yield [`EditingCommand::Unrecognized`].
pub fn decode_escape<R: Read + ?Sized>(input: &mut R) -> EditingCommand {
    let mut state = State::Escape;
    loop {
        let byte = match read_byte(input) {
            Ok(Some(b)) => b,
            Ok(None) => return EditingCommand::Unrecognized,
            Err(e) => {
                tracing::debug!("read failed mid escape sequence: {}", e);
                return EditingCommand::Unrecognized;
            }
        };

        match state.feed(byte) {
            Step::Next(next) => state = next,
            Step::Done(command) => {
                if command == EditingCommand::Unrecognized {
                    tracing::trace!(?state, byte, "unrecognized escape sequence");
                }
                return command;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn decode(bytes: &[u8]) -> EditingCommand {
        decode_escape(&mut Cursor::new(bytes.to_vec()))
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(decode(b"[A"), EditingCommand::HistoryPrev);
        assert_eq!(decode(b"[B"), EditingCommand::HistoryNext);
        assert_eq!(decode(b"[C"), EditingCommand::MoveRight);
        assert_eq!(decode(b"[D"), EditingCommand::MoveLeft);
    }

    #[test]
    fn test_home_end() {
        assert_eq!(decode(b"[H"), EditingCommand::Home);
        assert_eq!(decode(b"[F"), EditingCommand::End);
    }

    #[test]
    fn test_delete_key() {
        assert_eq!(decode(b"[3~"), EditingCommand::DeleteForward);
        assert_eq!(decode(b"[3x"), EditingCommand::Unrecognized);
    }

    #[test]
    fn test_unhandled_final_byte() {
        assert_eq!(decode(b"[Z"), EditingCommand::Unrecognized);
    }

    #[test]
    fn test_not_csi() {
        assert_eq!(decode(b"OH"), EditingCommand::Unrecognized);
    }

    #[test]
    fn test_stream_closed_mid_sequence() {
        assert_eq!(decode(b""), EditingCommand::Unrecognized);
        assert_eq!(decode(b"["), EditingCommand::Unrecognized);
        assert_eq!(decode(b"[3"), EditingCommand::Unrecognized);
    }

    #[test]
    fn test_consumes_only_the_sequence() {
        let mut input = Cursor::new(b"[Cx".to_vec());
        assert_eq!(decode_escape(&mut input), EditingCommand::MoveRight);
        assert_eq!(input.position(), 2);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_read_error_is_unrecognized() {
        assert_eq!(
            decode_escape(&mut FailingReader),
            EditingCommand::Unrecognized
        );
    }
}
