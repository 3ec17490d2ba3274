pub mod config;
pub mod file_writer;
pub mod formatter;

use std::path::PathBuf;

use anyhow::Result;

use config::LoggingConfig;
use formatter::LogFormat;

/// Initialize the logging system with the given configuration.
///
/// Console output goes to stderr so that stdout stays clean for the
/// location list reporters.
pub fn init(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{
        fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = config.file.as_ref().map(|log_file| {
        fmt::layer()
            .with_writer(file_writer::LogFileWriter::new(log_file.clone()))
            .with_target(true)
            .with_ansi(false)
            .with_timer(fmt::time::ChronoUtc::rfc_3339())
    });

    match (config.console, config.format) {
        (true, LogFormat::Text) => {
            Registry::default()
                .with(env_filter)
                .with(file_layer)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_ansi(true),
                )
                .init();
        }
        (true, LogFormat::Json) => {
            Registry::default()
                .with(env_filter)
                .with(file_layer)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .init();
        }
        (false, _) => {
            Registry::default().with(env_filter).with(file_layer).init();
        }
    }

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default() -> Result<()> {
    init(LoggingConfig::default())
}

/// Initialize logging from environment variables and CLI arguments
pub fn init_from_args(
    log_level: Option<String>,
    log_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let level = if verbose {
        "debug".to_string()
    } else {
        log_level
            .unwrap_or_else(|| std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
    };

    let file = log_file.or_else(|| std::env::var("TRACEJUMP_LOG_FILE").ok().map(PathBuf::from));

    let config = LoggingConfig {
        level,
        file,
        console: true,
        format: LogFormat::Text,
    };

    init(config)
}
