use std::path::PathBuf;

use crate::logging::formatter::LogFormat;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Path to log file (None = no file logging)
    pub file: Option<PathBuf>,
    /// Log to the console (stderr) in addition to any file
    pub console: bool,
    /// Console log format (text or json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
            file: std::env::var("TRACEJUMP_LOG_FILE").ok().map(PathBuf::from),
            console: true,
            format: LogFormat::Text,
        }
    }
}
