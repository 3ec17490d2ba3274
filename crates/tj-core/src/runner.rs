use std::io;
use std::process::Command;

use tracing::{debug, info};

use crate::error::TjError;

/// Output captured from a wrapped command.
pub struct CapturedRun {
    /// Combined stdout and stderr (stdout first, each stream in order)
    pub output: String,
    /// Child exit code, None when terminated by a signal
    pub exit_code: Option<i32>,
}

impl CapturedRun {
    /// True when the child exited with status 0.
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a target command to completion and captures its output for parsing.
///
/// A command that spawns but exits non-zero is the normal case here (that is
/// when tracebacks appear); only a failure to spawn at all is an error.
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, command: &[String]) -> Result<CapturedRun, TjError> {
        let (program, args) = command.split_first().ok_or_else(|| TjError::CommandSpawn {
            command: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty command"),
        })?;

        debug!(program = %program, args = ?args, "spawning wrapped command");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| TjError::CommandSpawn {
                command: command.join(" "),
                source,
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        let exit_code = output.status.code();
        info!(
            program = %program,
            exit_code = ?exit_code,
            captured_bytes = text.len(),
            "wrapped command finished"
        );

        Ok(CapturedRun {
            output: text,
            exit_code,
        })
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
