//! Blocking byte reads from a raw-mode input stream.

use std::io::{self, BufRead, ErrorKind, Read};

use super::types::Key;

/// Read one byte. `Ok(None)` means the stream is closed.
/// Interrupted reads are retried.
pub fn read_byte<R: Read + ?Sized>(input: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Look at the next byte without consuming it. `Ok(None)` means the stream
/// is closed.
fn peek_byte<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<u8>> {
    loop {
        match input.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Number of bytes in a UTF-8 sequence starting with `lead` (0 if invalid)
fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

fn is_continuation(byte: u8) -> bool {
    (0x80..=0xbf).contains(&byte)
}

/// Read one key. Multi-byte UTF-8 characters are assembled into a single
/// [`Key::Char`]; malformed sequences become [`Key::Other`] with the lead byte.
///
/// Only continuation bytes are consumed after a lead byte. Anything else (an
/// 8-bit Meta key followed by an arrow, say) is left in `input` for the next
/// call.
pub fn read_key<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<Key>> {
    let Some(lead) = read_byte(input)? else {
        return Ok(None);
    };

    let width = utf8_len(lead);
    if width <= 1 {
        return Ok(Some(Key::from_byte(lead)));
    }

    let mut bytes = [lead, 0, 0, 0];
    for slot in bytes.iter_mut().take(width).skip(1) {
        match peek_byte(input)? {
            Some(b) if is_continuation(b) => {
                input.consume(1);
                *slot = b;
            }
            Some(_) => return Ok(Some(Key::Other(lead))),
            None => return Ok(None),
        }
    }

    let key = match std::str::from_utf8(&bytes[..width]) {
        Ok(s) => match s.chars().next() {
            Some(ch) if !ch.is_control() => Key::Char(ch),
            _ => Key::Other(lead),
        },
        Err(_) => Key::Other(lead),
    };
    Ok(Some(key))
}
