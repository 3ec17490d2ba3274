use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::error;

use tj_cli::input::{self, InputSource};
use tj_cli::reporters::{JsonReporter, TextReporter};
use tj_cli::selector::{self, Outcome};
use tj_cli::ListFormat;
use tj_core::opener::EditorOpener;
use tj_core::parser::{fold_duplicates, TraceParser};
use tj_core::TjError;

/// Jump from a pasted, piped, or captured stack trace straight to the
/// referenced source line in your editor.
#[derive(Parser, Debug)]
#[command(name = "tracejump", version, about)]
struct Cli {
    /// Read the trace from the system clipboard instead of stdin
    #[arg(long, conflicts_with = "command")]
    clipboard: bool,

    /// Print the distinct locations instead of opening an editor
    #[arg(long)]
    list: bool,

    /// Output format for --list
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    format: ListFormat,

    /// Open the N-th distinct location without prompting (1-based)
    #[arg(long, value_name = "N")]
    pick: Option<usize>,

    /// Editor command to open locations with (default: $VISUAL, $EDITOR, vi)
    #[arg(short, long, value_name = "CMD")]
    editor: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Shortcut for --log-level debug
    #[arg(short, long)]
    verbose: bool,

    /// Command to run and capture (wrapper mode); without it stdin is read
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) =
        tj_core::logging::init_from_args(cli.log_level.clone(), cli.log_file.clone(), cli.verbose)
    {
        eprintln!("{}", format!("Warning: logging setup failed: {}", err).yellow());
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("Error: {}", err).red());
            error!(error = %err, "run failed");
            let code = err
                .downcast_ref::<TjError>()
                .map(TjError::exit_code)
                .unwrap_or(4);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = if cli.clipboard {
        InputSource::Clipboard
    } else if !cli.command.is_empty() {
        InputSource::Command(cli.command.clone())
    } else {
        InputSource::Stdin
    };

    let text = input::acquire(source)?;

    let locations = TraceParser::new().parse(&text);
    if locations.is_empty() {
        return Err(TjError::NoLocations.into());
    }

    let distinct = fold_duplicates(&locations);
    eprintln!(
        "{}",
        format!("Found {} traceback location(s)", distinct.len()).green()
    );

    if cli.list {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match cli.format {
            ListFormat::Text => TextReporter.generate(&distinct, &mut out)?,
            ListFormat::Json => JsonReporter.generate(&distinct, &mut out)?,
        }
        return Ok(());
    }

    let opener = match &cli.editor {
        Some(command_line) => EditorOpener::new(command_line),
        None => EditorOpener::from_env(),
    };

    let outcome = selector::select_and_open(&locations, cli.pick, |location| {
        eprintln!(
            "{}",
            format!("Opening: {} at line {}", location.file, location.line).green()
        );
        opener.open(location)
    })?;

    if let Outcome::Cancelled = outcome {
        eprintln!("{}", "Cancelled".yellow());
    }

    Ok(())
}
