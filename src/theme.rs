//! Color palette for prompt and command-line highlighting
//!
//! Colors are configured by name (`green`, `bright_blue`, ...) or as `#rrggbb`
//! hex. Unknown names resolve to "no color" so a typo in the config renders
//! plain text instead of failing.

use crossterm::style::Color;

/// Resolve a color name. `None` means reset / terminal default.
pub fn color_from_name(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    if name.starts_with('#') {
        return from_hex(&name).ok();
    }

    let color = match name.as_str() {
        "black" => Color::Black,
        "red" => Color::DarkRed,
        "green" => Color::DarkGreen,
        "yellow" => Color::DarkYellow,
        "blue" => Color::DarkBlue,
        "magenta" => Color::DarkMagenta,
        "cyan" => Color::DarkCyan,
        "white" => Color::Grey,
        "grey" | "gray" | "bright_black" => Color::DarkGrey,
        "bright_red" => Color::Red,
        "bright_green" => Color::Green,
        "bright_yellow" => Color::Yellow,
        "bright_blue" => Color::Blue,
        "bright_magenta" => Color::Magenta,
        "bright_cyan" => Color::Cyan,
        "bright_white" => Color::White,
        "reset" | "none" | "" => return None,
        other => {
            tracing::debug!("unknown color name {:?}, using reset", other);
            return None;
        }
    };
    Some(color)
}

/// Parse `#rrggbb`
fn from_hex(s: &str) -> Result<Color, String> {
    let s = s.trim_start_matches('#');
    if s.len() != 6 || !s.is_ascii() {
        return Err(format!("Invalid color format: {}", s));
    }
    Ok(Color::Rgb {
        r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
        g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
        b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
    })
}

/// Role of a word on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStyle {
    Command,
    Flag,
    Path,
    Plain,
}

impl WordStyle {
    /// Style for the word at `index` (0 = command name)
    pub fn classify(index: usize, word: &str) -> Self {
        if index == 0 {
            WordStyle::Command
        } else if word.starts_with('-') {
            WordStyle::Flag
        } else if word.contains(std::path::is_separator) || word.contains('~') {
            WordStyle::Path
        } else {
            WordStyle::Plain
        }
    }
}

/// Resolved colors used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub prompt: Option<Color>,
    pub command: Option<Color>,
    pub flag: Option<Color>,
    pub path: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            prompt: Some(Color::DarkYellow),
            command: Some(Color::DarkGreen),
            flag: Some(Color::DarkYellow),
            path: Some(Color::DarkBlue),
        }
    }
}

impl Palette {
    /// No colors at all (`--no-color`)
    pub fn plain() -> Self {
        Self {
            prompt: None,
            command: None,
            flag: None,
            path: None,
        }
    }

    /// Build from color names
    pub fn from_names(prompt: &str, command: &str, flag: &str, path: &str) -> Self {
        Self {
            prompt: color_from_name(prompt),
            command: color_from_name(command),
            flag: color_from_name(flag),
            path: color_from_name(path),
        }
    }

    pub fn color_for(&self, style: WordStyle) -> Option<Color> {
        match style {
            WordStyle::Command => self.command,
            WordStyle::Flag => self.flag,
            WordStyle::Path => self.path,
            WordStyle::Plain => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_names() {
        assert_eq!(color_from_name("green"), Some(Color::DarkGreen));
        assert_eq!(color_from_name("Yellow"), Some(Color::DarkYellow));
        assert_eq!(color_from_name("bright_blue"), Some(Color::Blue));
    }

    #[test]
    fn test_unknown_falls_back_to_reset() {
        assert_eq!(color_from_name("chartreuse-ish"), None);
        assert_eq!(color_from_name("reset"), None);
        assert_eq!(color_from_name("#12"), None);
    }

    #[test]
    fn test_hex() {
        assert_eq!(
            color_from_name("#ff8000"),
            Some(Color::Rgb {
                r: 255,
                g: 128,
                b: 0
            })
        );
    }

    #[test]
    fn test_word_classification() {
        assert_eq!(WordStyle::classify(0, "-weird"), WordStyle::Command);
        assert_eq!(WordStyle::classify(1, "-la"), WordStyle::Flag);
        assert_eq!(WordStyle::classify(1, "--all"), WordStyle::Flag);
        assert_eq!(WordStyle::classify(2, "src/main.rs"), WordStyle::Path);
        assert_eq!(WordStyle::classify(1, "~"), WordStyle::Path);
        assert_eq!(WordStyle::classify(1, "hello"), WordStyle::Plain);
    }

    #[test]
    fn test_palette_lookup() {
        let palette = Palette::from_names("yellow", "green", "nope", "blue");
        assert_eq!(palette.color_for(WordStyle::Command), Some(Color::DarkGreen));
        assert_eq!(palette.color_for(WordStyle::Flag), None);
        assert_eq!(palette.color_for(WordStyle::Plain), None);
        assert_eq!(Palette::plain().color_for(WordStyle::Path), None);
    }
}
