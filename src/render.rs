//! Redraws the prompt and the line being edited.
//!
//! Every redraw clears the terminal line, prints the prompt and the content
//! with per-word colors, then places the cursor with an absolute column
//! escape. There is no diffing; the whole line is recomputed each time.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::editable::LineBuffer;
use crate::theme::{Palette, WordStyle};

/// Prompt text and its on-screen width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
    width: usize,
}

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = visible_width(&text);
        Self { text, width }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width in columns, not counting embedded escape sequences
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Terminal columns taken by `s`, ignoring ANSI escape sequences. Wide
/// glyphs (CJK, emoji) count as two.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi_escapes::strip_str(s).as_str())
}

/// Terminal columns taken by `chars`
fn columns(chars: &[char]) -> usize {
    chars
        .iter()
        .map(|&c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum()
}

/// A run of the line: either whitespace or a word with its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Space(&'a str),
    Word { index: usize, text: &'a str },
}

/// Split into alternating whitespace and word runs, numbering the words
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut word_index = 0;
    let mut start = 0;
    let mut in_space = None;

    for (i, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev == space => {}
            Some(prev) => {
                segments.push(make_segment(&text[start..i], prev, &mut word_index));
                start = i;
            }
            None => {}
        }
        in_space = Some(space);
    }
    if let Some(prev) = in_space {
        segments.push(make_segment(&text[start..], prev, &mut word_index));
    }
    segments
}

fn make_segment<'a>(text: &'a str, space: bool, word_index: &mut usize) -> Segment<'a> {
    if space {
        Segment::Space(text)
    } else {
        let index = *word_index;
        *word_index += 1;
        Segment::Word { index, text }
    }
}

/// Draws the edit line with a [`Palette`]
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Redraw the whole line and position the cursor
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        prompt: &Prompt,
        buffer: &LineBuffer,
    ) -> io::Result<()> {
        queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        print_colored(out, prompt.text(), self.palette.prompt)?;
        queue!(out, Print(' '))?;

        let text = buffer.text();
        for segment in segments(&text) {
            match segment {
                Segment::Space(s) => queue!(out, Print(s))?,
                Segment::Word { index, text } => {
                    let color = self.palette.color_for(WordStyle::classify(index, text));
                    print_colored(out, text, color)?;
                }
            }
        }

        let column = prompt.width() + 1 + columns(buffer.before_cursor());
        queue!(out, MoveToColumn(u16::try_from(column).unwrap_or(u16::MAX)))?;
        out.flush()
    }

    /// Print the prompt for the line-buffered fallback reader
    pub fn render_basic_prompt<W: Write>(&self, out: &mut W, prompt: &Prompt) -> io::Result<()> {
        print_colored(out, prompt.text(), self.palette.prompt)?;
        queue!(out, Print(' '))?;
        out.flush()
    }

    /// End the edit line. Raw mode needs an explicit carriage return.
    pub fn finish_line<W: Write>(&self, out: &mut W, marker: &str) -> io::Result<()> {
        queue!(out, Print(marker), Print("\r\n"))?;
        out.flush()
    }
}

const BANNER: &str = r"████████╗██████╗  █████╗ ███████╗██╗  ██╗
╚══██╔══╝██╔══██╗██╔══██╗██╔════╝██║  ██║
   ██║   ██████╔╝███████║███████╗███████║
   ██║   ██╔══██╗██╔══██║╚════██║██╔══██║
   ██║   ██║  ██║██║  ██║███████║██║  ██║
   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝";

const TAGLINE: &str =
    "it's in the name, I have no idea why you're using this shell.... enjoy your stay though :)";

/// Startup banner, printed once before the first prompt
pub fn write_banner<W: Write>(out: &mut W, palette: &Palette) -> io::Result<()> {
    queue!(out, Print("\n\n"))?;
    print_colored(out, BANNER, palette.prompt)?;
    queue!(out, Print("\n\n\n"), Print(TAGLINE), Print("\n\n\n"))?;
    out.flush()
}

fn print_colored<W: Write>(out: &mut W, text: &str, color: Option<Color>) -> io::Result<()> {
    match color {
        Some(color) => queue!(out, SetForegroundColor(color), Print(text), ResetColor),
        None => queue!(out, Print(text)),
    }
}
