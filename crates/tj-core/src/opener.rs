use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::TjError;
use crate::models::Location;

/// Launches the user's editor with the cursor on a given location.
///
/// The editor command line comes from an explicit override, `$VISUAL`,
/// `$EDITOR`, or `vi`, in that order, and may carry its own flags
/// (e.g. `code -w`).
pub struct EditorOpener {
    command: Vec<String>,
}

impl EditorOpener {
    /// Builds an opener from an editor command line.
    pub fn new(command_line: &str) -> Self {
        let command = shell_words::split(command_line).unwrap_or_else(|err| {
            warn!(editor = %command_line, error = %err, "editor command not shell-parseable, using verbatim");
            vec![command_line.to_string()]
        });
        Self { command }
    }

    /// Resolves the editor from the environment.
    pub fn from_env() -> Self {
        let command_line = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .unwrap_or_else(|_| "vi".to_string());
        Self::new(&command_line)
    }

    /// Opens `location` in the editor and waits for it to exit.
    ///
    /// The referenced file must exist on disk; relative paths resolve
    /// against the current working directory.
    pub fn open(&self, location: &Location) -> Result<(), TjError> {
        if !Path::new(&location.file).exists() {
            return Err(TjError::FileMissing {
                file: location.file.clone(),
            });
        }

        let program = self.command.first().map(String::as_str).unwrap_or("vi");
        let cursor = cursor_args(program, location);
        debug!(editor = %program, args = ?cursor, "launching editor");

        let status = Command::new(program)
            .args(&self.command[1..])
            .args(&cursor)
            .status()
            .map_err(|source| TjError::EditorNotFound {
                editor: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(TjError::EditorFailed {
                editor: program.to_string(),
                status,
            });
        }
        Ok(())
    }
}

/// Per-editor cursor positioning syntax. Unknown editors get the bare file
/// argument and land at the top of the buffer.
fn cursor_args(program: &str, location: &Location) -> Vec<String> {
    let name = Path::new(program)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(program);

    let file_line_col = || match location.column {
        Some(col) => format!("{}:{}:{}", location.file, location.line, col),
        None => format!("{}:{}", location.file, location.line),
    };

    match name {
        "vi" | "vim" | "nvim" | "gvim" | "view" => {
            vec![format!("+{}", location.line), location.file.clone()]
        }
        "code" | "code-insiders" | "codium" | "vscodium" => {
            vec!["--goto".to_string(), file_line_col()]
        }
        "subl" | "sublime_text" | "hx" => vec![file_line_col()],
        "emacs" | "emacsclient" => {
            let pos = match location.column {
                Some(col) => format!("+{}:{}", location.line, col),
                None => format!("+{}", location.line),
            };
            vec![pos, location.file.clone()]
        }
        "nano" | "micro" => {
            let pos = match location.column {
                Some(col) => format!("+{},{}", location.line, col),
                None => format!("+{}", location.line),
            };
            vec![pos, location.file.clone()]
        }
        _ => vec![location.file.clone()],
    }
}
