use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// One candidate place to jump to, extracted from a frame line.
///
/// Equality and hashing consider only `file` and `line`; the column is
/// informational and does not distinguish two locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// File path as it appeared in the trace (resolved against the
    /// working directory only when opened, never at parse time)
    pub file: String,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (optional, 1-based)
    pub column: Option<usize>,
}

impl Location {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column: None,
        }
    }

    pub fn with_column(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column: Some(column),
        }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.file == other.file && self.line == other.line
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.file.hash(state);
        self.line.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(col) => write!(f, "{}:{}:{}", self.file, self.line, col),
            None => write!(f, "{}:{}", self.file, self.line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_column() {
        let a = Location::with_column("src/main.rs", 10, 5);
        let b = Location::new("src/main.rs", 10);
        assert_eq!(a, b);

        let c = Location::new("src/main.rs", 11);
        assert_ne!(a, c);
    }

    #[test]
    fn display_includes_column_when_present() {
        assert_eq!(Location::new("app.py", 42).to_string(), "app.py:42");
        assert_eq!(
            Location::with_column("app.py", 42, 7).to_string(),
            "app.py:42:7"
        );
    }

    #[test]
    fn serializes_to_json_object() {
        let loc = Location::with_column("server.js", 88, 3);
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["file"], "server.js");
        assert_eq!(json["line"], 88);
        assert_eq!(json["column"], 3);
    }
}
