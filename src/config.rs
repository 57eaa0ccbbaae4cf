//! Shell configuration
//!
//! Stored in `~/.config/trash/config.yaml`. Every field is optional:
//!
//! ```yaml
//! prompt: traSH
//! prompt_symbol: "$"
//! prompt_color: yellow
//! colors:
//!   command: green
//!   flag: yellow
//!   path: blue
//! history_size: 1000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_HISTORY_SIZE;
use crate::theme::Palette;

/// Shell configuration, built once at startup and passed to the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt name shown before the working directory
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Printed right after the working directory
    #[serde(default = "default_prompt_symbol")]
    pub prompt_symbol: String,

    #[serde(default = "default_prompt_color")]
    pub prompt_color: String,

    #[serde(default)]
    pub colors: ColorConfig,

    /// Maximum number of history entries kept in memory
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Colors for command-line highlighting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_command_color")]
    pub command: String,
    #[serde(default = "default_flag_color")]
    pub flag: String,
    #[serde(default = "default_path_color")]
    pub path: String,
}

fn default_prompt() -> String {
    "traSH".to_string()
}

fn default_prompt_symbol() -> String {
    "$".to_string()
}

fn default_prompt_color() -> String {
    "yellow".to_string()
}

fn default_command_color() -> String {
    "green".to_string()
}

fn default_flag_color() -> String {
    "yellow".to_string()
}

fn default_path_color() -> String {
    "blue".to_string()
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            command: default_command_color(),
            flag: default_flag_color(),
            path: default_path_color(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            prompt_symbol: default_prompt_symbol(),
            prompt_color: default_prompt_color(),
            colors: ColorConfig::default(),
            history_size: default_history_size(),
        }
    }
}

impl ShellConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a YAML document. An empty document gives the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    pub fn palette(&self) -> Palette {
        Palette::from_names(
            &self.prompt_color,
            &self.colors.command,
            &self.colors.flag,
            &self.colors.path,
        )
    }

    /// Visible prompt: `"<prompt> <cwd><symbol>"` with the home directory
    /// shown as `~`
    pub fn prompt_text(&self, cwd: &Path, home: Option<&Path>) -> String {
        let location = match home.and_then(|h| cwd.strip_prefix(h).ok()) {
            Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
            Some(rest) => format!("~{}{}", std::path::MAIN_SEPARATOR, rest.display()),
            None => cwd.display().to_string(),
        };
        format!("{} {}{}", self.prompt, location, self.prompt_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, "traSH");
        assert_eq!(config.prompt_symbol, "$");
        assert_eq!(config.history_size, DEFAULT_HISTORY_SIZE);
        assert_eq!(config.palette(), Palette::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = ShellConfig::from_yaml("prompt: mysh\ncolors:\n  flag: red\n").unwrap();
        assert_eq!(config.prompt, "mysh");
        assert_eq!(config.prompt_symbol, "$");
        assert_eq!(config.colors.flag, "red");
        assert_eq!(config.colors.command, "green");
        assert_eq!(config.palette().flag, Some(Color::DarkRed));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ShellConfig::from_yaml("").unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_invalid_yaml_errors() {
        assert!(ShellConfig::from_yaml("history_size: [1, 2").is_err());
    }

    #[test]
    fn test_prompt_text_abbreviates_home() {
        let config = ShellConfig::default();
        let home = PathBuf::from("/home/u");
        assert_eq!(
            config.prompt_text(Path::new("/home/u"), Some(&home)),
            "traSH ~$"
        );
        assert_eq!(
            config.prompt_text(Path::new("/home/u/src"), Some(&home)),
            "traSH ~/src$"
        );
        assert_eq!(config.prompt_text(Path::new("/tmp"), Some(&home)), "traSH /tmp$");
        assert_eq!(config.prompt_text(Path::new("/tmp"), None), "traSH /tmp$");
    }
}
