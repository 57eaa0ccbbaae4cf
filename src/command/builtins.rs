//! Builtin commands and external program launch.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{anyhow, Context, Result};

use super::ParsedCommand;

/// Builtins with their usage line and description
pub const BUILTINS: &[(&str, &str, &str)] = &[
    ("cd", "cd <dir>", "change directory"),
    ("exit", "exit", "exit the shell"),
    ("help", "help", "show this help message"),
];

/// What the main loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Run `cmd`. Builtin output (help) goes to `out`; external programs inherit
/// the process's stdio.
pub fn dispatch<W: Write>(cmd: &ParsedCommand, out: &mut W) -> Result<Flow> {
    tracing::debug!(%cmd, "dispatch");
    match cmd.name.as_str() {
        "cd" => {
            change_dir(cmd)?;
            Ok(Flow::Continue)
        }
        "exit" => Ok(Flow::Exit),
        "help" => {
            out.write_all(help_text().as_bytes())?;
            out.flush()?;
            Ok(Flow::Continue)
        }
        _ => {
            run_external(cmd)?;
            Ok(Flow::Continue)
        }
    }
}

pub fn help_text() -> String {
    let mut text = String::from("\nAvailable commands:\n");
    for (_, usage, description) in BUILTINS {
        text.push_str(&format!("  {:<16}{}\n", usage, description));
    }
    text.push_str("\nYou can also run any program on your PATH, like 'ls', 'cat' or 'git'.\n\n");
    text
}

/// `cd` with no operand goes home
fn change_dir(cmd: &ParsedCommand) -> Result<()> {
    let home = dirs::home_dir();
    let target = match cmd.operands().next() {
        Some(dir) => PathBuf::from(expand_tilde(dir, home.as_deref())),
        None => home.context("cd: could not determine home directory")?,
    };

    std::env::set_current_dir(&target).with_context(|| format!("cd: {}", target.display()))?;
    tracing::info!("changed directory to {}", target.display());
    Ok(())
}

fn run_external(cmd: &ParsedCommand) -> Result<()> {
    let home = dirs::home_dir();
    let args: Vec<String> = cmd
        .args
        .iter()
        .map(|arg| expand_tilde(arg, home.as_deref()))
        .collect();

    let status = process::Command::new(&cmd.name)
        .args(&args)
        .status()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => anyhow!(
                "{}: command not found -- use help for a list of builtin commands",
                cmd.name
            ),
            _ => anyhow!(e).context(format!("failed to run {}", cmd.name)),
        })?;

    if !status.success() {
        tracing::debug!(command = %cmd.name, ?status, "command exited unsuccessfully");
    }
    Ok(())
}

/// Replace a leading `~` or `~/` with the home directory
pub(crate) fn expand_tilde(arg: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return arg.to_string();
    };
    if arg == "~" {
        return home.display().to_string();
    }
    match arg.strip_prefix("~/") {
        Some(rest) => home.join(rest).display().to_string(),
        None => arg.to_string(),
    }
}
