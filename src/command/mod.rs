//! Turning a finished line into a command and running it
//!
//! ```
//! use trash::command::ParsedCommand;
//!
//! let cmd = ParsedCommand::parse(r#"echo -n "Hello, World!""#).unwrap();
//! assert_eq!(cmd.name, "echo");
//! assert!(cmd.has_option('n'));
//! assert_eq!(cmd.args, ["-n", "Hello, World!"]);
//! ```

mod builtins;
mod tokenizer;

use std::fmt;

pub use builtins::{dispatch, help_text, Flow, BUILTINS};
pub use tokenizer::tokenize;

/// A tokenized command line.
///
/// Every token after the name is kept in `args`, including ones that start
/// with `-`. Those also contribute their characters to `options`: `-la` adds
/// `l` and `a`, `--all` adds `a`, `l`, `l` (deduplicated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
    /// Option characters in first-seen order, without duplicates
    pub options: Vec<char>,
}

impl ParsedCommand {
    /// Parse a raw line. Blank lines give `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = tokenize(line).into_iter();
        let name = tokens.next()?;
        let args: Vec<String> = tokens.collect();

        let mut options = Vec::new();
        for arg in &args {
            let Some(rest) = arg.strip_prefix('-') else {
                continue;
            };
            let flags = rest.strip_prefix('-').unwrap_or(rest);
            for ch in flags.chars() {
                if !options.contains(&ch) {
                    options.push(ch);
                }
            }
        }

        Some(Self {
            name,
            args,
            options,
        })
    }

    pub fn has_option(&self, ch: char) -> bool {
        self.options.contains(&ch)
    }

    /// Arguments that do not start with `-`
    pub fn operands(&self) -> impl Iterator<Item = &str> {
        self.args
            .iter()
            .map(String::as_str)
            .filter(|arg| !arg.starts_with('-'))
    }
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options: String = self.options.iter().collect();
        write!(
            f,
            "cmd: {}, args: {:?}, opts: {}",
            self.name, self.args, options
        )
    }
}
