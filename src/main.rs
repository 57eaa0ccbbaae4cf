use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use trash::cli::{CliArgs, StartupConfig, StartupMode};
use trash::command::{dispatch, Flow};
use trash::editable::History;
use trash::render::write_banner;
use trash::theme::Palette;
use trash::{CompletionEngine, LineOutcome, ParsedCommand, Prompt, Renderer, Session};

// ============================================================================
// COMMANDS
// ============================================================================

/// Parse and run one line. Blank lines are a no-op.
fn run_line(line: &str) -> Result<Flow> {
    let Some(cmd) = ParsedCommand::parse(line) else {
        return Ok(Flow::Continue);
    };
    let stdout = io::stdout();
    dispatch(&cmd, &mut stdout.lock())
}

fn current_prompt(startup: &StartupConfig) -> Prompt {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("?"));
    let home = dirs::home_dir();
    Prompt::new(startup.shell.prompt_text(&cwd, home.as_deref()))
}

// ============================================================================
// INTERACTIVE LOOP
// ============================================================================

fn interactive(startup: &StartupConfig, basic: bool) {
    let palette = if startup.color {
        startup.shell.palette()
    } else {
        Palette::plain()
    };
    if let Err(e) = write_banner(&mut io::stdout().lock(), &palette) {
        tracing::debug!("failed to write banner: {}", e);
    }

    let mut session = Session::new(
        CompletionEngine::from_env(),
        History::with_max_size(startup.shell.history_size),
        Renderer::new(palette),
    );

    loop {
        let prompt = current_prompt(startup);
        let outcome = if basic {
            let stdin = io::stdin();
            let stdout = io::stdout();
            session.read_basic(&mut stdin.lock(), &mut stdout.lock(), &prompt)
        } else {
            session.read_outcome(&prompt)
        };

        let line = match outcome {
            LineOutcome::Submitted(line) => line,
            LineOutcome::Interrupted => continue,
            LineOutcome::ExitRequested => break,
            LineOutcome::Closed(_) => {
                // Leave the shell's own prompt on a fresh line
                println!();
                break;
            }
        };

        match run_line(&line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                tracing::debug!("command failed: {:#}", e);
                eprintln!("{:#}", e);
            }
        }
        if let Err(e) = io::stdout().flush() {
            tracing::debug!("failed to flush stdout: {}", e);
        }
    }
}

// ============================================================================
// MAIN - Entry point
// ============================================================================

fn main() -> Result<()> {
    let args = CliArgs::parse();
    trash::tracing::init();

    let startup = args.into_config();
    tracing::info!("starting trash ({:?})", startup.mode);

    match &startup.mode {
        StartupMode::OneShot(line) => {
            run_line(line)?;
        }
        StartupMode::Interactive { basic } => {
            interactive(&startup, *basic);
            println!("\ntraSH has been killed (rightfully so)... Thanks for visiting :)");
        }
    }

    tracing::info!("trash exiting");
    Ok(())
}
