use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors surfaced to the user by the navigation pipeline.
///
/// Parsing itself is total over arbitrary text and never produces an error;
/// the variants here cover everything downstream of it.
#[derive(Debug, Error)]
pub enum TjError {
    /// No frame line in the input matched any known dialect
    #[error("no source locations found in input")]
    NoLocations,

    /// The user's selection was out of range or not a number
    #[error("invalid selection '{input}': {reason}")]
    InvalidSelection { input: String, reason: String },

    /// The referenced file does not exist on disk at open time
    #[error("file does not exist: {file}")]
    FileMissing { file: String },

    /// The editor binary could not be started at all
    #[error("editor '{editor}' could not be started: {source}")]
    EditorNotFound {
        editor: String,
        #[source]
        source: io::Error,
    },

    /// The editor started but exited unsuccessfully
    #[error("editor '{editor}' exited with {status}")]
    EditorFailed { editor: String, status: ExitStatus },

    /// Wrapper mode: the target command could not be spawned.
    /// A command that spawns and then exits non-zero is not an error;
    /// its output is still parsed.
    #[error("failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl TjError {
    /// Process exit code associated with this error at the CLI boundary.
    pub fn exit_code(&self) -> i32 {
        match self {
            TjError::NoLocations => 1,
            TjError::InvalidSelection { .. } => 2,
            TjError::FileMissing { .. }
            | TjError::EditorNotFound { .. }
            | TjError::EditorFailed { .. } => 3,
            TjError::CommandSpawn { .. } => 4,
        }
    }
}
