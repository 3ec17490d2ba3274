use std::io::Read;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use tj_core::runner::CommandRunner;

/// Where this invocation's raw trace text comes from.
#[derive(Debug)]
pub enum InputSource {
    /// Piped or pasted text on stdin (bare invocation)
    Stdin,
    /// System clipboard (`--clipboard`)
    Clipboard,
    /// Wrapper mode: run the command and capture its combined output
    Command(Vec<String>),
}

/// Reads the raw trace from the chosen source. The text is read once and
/// handed to the parser as-is.
pub fn acquire(source: InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => read_stdin(),
        InputSource::Clipboard => read_clipboard(),
        InputSource::Command(command) => run_command(&command),
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    info!(bytes = text.len(), "read trace from stdin");
    Ok(text)
}

fn read_clipboard() -> Result<String> {
    eprintln!("{}", "Reading traceback from clipboard...".blue());
    let mut clipboard = arboard::Clipboard::new().context("clipboard is not available")?;
    let text = clipboard
        .get_text()
        .context("clipboard has no text content")?;
    info!(bytes = text.len(), "read trace from clipboard");
    Ok(text)
}

fn run_command(command: &[String]) -> Result<String> {
    eprintln!("{}", format!("Running: {}", command.join(" ")).blue());

    let run = CommandRunner::new().run(command)?;

    // Echo the child's output so the user sees the run they asked for.
    print!("{}", run.output);

    if run.succeeded() {
        eprintln!("{}", "Command succeeded (exit code 0)".green());
    } else {
        let label = match run.exit_code {
            Some(code) => format!("Command failed (exit code {})", code),
            None => "Command terminated by signal".to_string(),
        };
        eprintln!("{}", label.yellow());
    }

    Ok(run.output)
}
