//! Command-line argument parsing for the shell
//!
//! Supports:
//! - Interactive mode with full line editing (the default)
//! - Basic mode, where the terminal does the line editing
//! - Running a single command line and exiting
//! - Overriding the config file, prompt and colors

use clap::Parser;
use std::path::PathBuf;

use crate::config::ShellConfig;

/// A small interactive shell
#[derive(Parser, Debug)]
#[command(name = "trash", version, about = "A small interactive shell")]
pub struct CliArgs {
    /// Run a single command line and exit
    #[arg(short = 'c', long, value_name = "LINE")]
    pub command: Option<String>,

    /// Read lines without raw-mode editing
    #[arg(long)]
    pub basic: bool,

    /// Load configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured prompt name
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// What the shell does after startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Read lines until exit
    Interactive {
        /// Skip raw mode even when stdin is a terminal
        basic: bool,
    },
    /// Run one command line and exit
    OneShot(String),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    pub shell: ShellConfig,
    pub color: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration, loading the shell
    /// config from `--config` or the default location
    pub fn into_config(self) -> StartupConfig {
        let shell = match &self.config {
            Some(path) => ShellConfig::load_from(path),
            None => ShellConfig::load(),
        };
        self.into_config_with(shell)
    }

    /// Like [`CliArgs::into_config`] with an already loaded shell config
    pub fn into_config_with(self, mut shell: ShellConfig) -> StartupConfig {
        if let Some(prompt) = self.prompt {
            shell.prompt = prompt;
        }

        let mode = match self.command {
            Some(line) => StartupMode::OneShot(line),
            None => StartupMode::Interactive { basic: self.basic },
        };

        StartupConfig {
            mode,
            shell,
            color: !self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            command: None,
            basic: false,
            config: None,
            prompt: None,
            no_color: false,
        }
    }

    #[test]
    fn test_no_args_is_interactive() {
        let config = args().into_config_with(ShellConfig::default());
        assert_eq!(config.mode, StartupMode::Interactive { basic: false });
        assert!(config.color);
    }

    #[test]
    fn test_basic_flag() {
        let config = CliArgs {
            basic: true,
            ..args()
        }
        .into_config_with(ShellConfig::default());
        assert_eq!(config.mode, StartupMode::Interactive { basic: true });
    }

    #[test]
    fn test_command_gives_one_shot() {
        let config = CliArgs {
            command: Some("ls -l".to_string()),
            ..args()
        }
        .into_config_with(ShellConfig::default());
        assert_eq!(config.mode, StartupMode::OneShot("ls -l".to_string()));
    }

    #[test]
    fn test_prompt_override() {
        let config = CliArgs {
            prompt: Some("mysh".to_string()),
            no_color: true,
            ..args()
        }
        .into_config_with(ShellConfig::default());
        assert_eq!(config.shell.prompt, "mysh");
        assert!(!config.color);
    }

    #[test]
    fn test_config_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "prompt: fromfile\nhistory_size: 5\n").unwrap();

        let config = CliArgs {
            config: Some(path),
            ..args()
        }
        .into_config();
        assert_eq!(config.shell.prompt, "fromfile");
        assert_eq!(config.shell.history_size, 5);
    }

    #[test]
    fn test_parse_from_argv() {
        let parsed = CliArgs::try_parse_from(["trash", "--basic", "--prompt", "x"]).unwrap();
        assert!(parsed.basic);
        assert_eq!(parsed.prompt.as_deref(), Some("x"));
    }
}
