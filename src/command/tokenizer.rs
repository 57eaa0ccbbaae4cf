//! Quote-aware splitting of a command line into arguments.
//!
//! - Whitespace outside quotes separates tokens; runs of it collapse.
//! - `'...'` and `"..."` group text; the other quote character is literal
//!   inside a quoted region. Quotes may open mid-word (`a"b c"` is one token).
//! - Inside quotes, `\n \t \r \\ \" \'` are decoded. Any other backslash pair
//!   is kept as written. Outside quotes a backslash is an ordinary character.
//! - An unterminated quote is not an error: the text read so far becomes the
//!   last token.

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InSingleQuote,
    InDoubleQuote,
}

impl State {
    fn closing_quote(self) -> Option<char> {
        match self {
            State::Normal => None,
            State::InSingleQuote => Some('\''),
            State::InDoubleQuote => Some('"'),
        }
    }
}

/// Decoded form of `\<ch>` inside quotes, if `ch` is a recognized escape
fn unescape(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Split `line` into tokens with quotes removed and escapes decoded.
///
/// A quoted empty string (`""`) yields an empty token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Distinguishes an empty quoted token from no token at all
    let mut in_token = false;
    let mut state = State::Normal;
    let mut chars = line.trim().chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            State::Normal => match ch {
                '\'' => {
                    state = State::InSingleQuote;
                    in_token = true;
                }
                '"' => {
                    state = State::InDoubleQuote;
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
            State::InSingleQuote | State::InDoubleQuote => {
                if Some(ch) == state.closing_quote() {
                    state = State::Normal;
                } else if ch == '\\' {
                    match chars.peek().copied().and_then(unescape) {
                        Some(decoded) => {
                            current.push(decoded);
                            chars.next();
                        }
                        None => current.push('\\'),
                    }
                } else {
                    current.push(ch);
                }
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}
