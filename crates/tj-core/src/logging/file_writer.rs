use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing_subscriber::fmt::MakeWriter;

/// Append-mode log file writer for tracing-subscriber.
///
/// Opens the file lazily on each write batch; if the file cannot be opened
/// the batch falls back to stderr so log lines are never lost silently.
pub struct LogFileWriter {
    path: PathBuf,
}

impl LogFileWriter {
    pub fn new(path: PathBuf) -> Self {
        if let Some(parent) = path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                eprintln!(
                    "warning: cannot create log directory {}: {}",
                    parent.display(),
                    err
                );
            }
        }
        Self { path }
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = Box<dyn Write + Send + Sync + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match OpenOptions::new().create(true).append(true).open(&self.path) {
            Ok(file) => Box::new(std::io::BufWriter::new(file)),
            Err(_) => Box::new(std::io::stderr()),
        }
    }
}
