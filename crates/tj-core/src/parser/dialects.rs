use std::sync::OnceLock;

use regex::Regex;

use crate::models::Location;

/// Line numbers above this bound are treated as noise, not references.
pub const MAX_LINE_NUMBER: usize = 10_000_000;

static QUOTED_FILE_REGEX: OnceLock<Regex> = OnceLock::new();
static STACK_FRAME_REGEX: OnceLock<Regex> = OnceLock::new();
static COLON_DELIMITED_REGEX: OnceLock<Regex> = OnceLock::new();
static PATH_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
static EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();

/// Python-style frame: `File "<path>", line <N>[, in <func>]`.
/// The quoted path may contain backslash-escaped characters.
fn quoted_file_regex() -> &'static Regex {
    QUOTED_FILE_REGEX.get_or_init(|| {
        Regex::new(r#"File\s+"((?:[^"\\]|\\.)+)",\s+line\s+(\d+)"#)
            .expect("Failed to compile quoted-file regex")
    })
}

/// Runtime stack-frame style: `at <func> (<path>:<line>[:<col>])` or
/// `at <path>:<line>[:<col>]`, as emitted by JS engines and JVM-alike
/// runtimes. The optional drive-letter prefix keeps `C:\...` paths intact.
fn stack_frame_regex() -> &'static Regex {
    STACK_FRAME_REGEX.get_or_init(|| {
        Regex::new(r"^\s*at\s+(?:.*\()?((?:[A-Za-z]:[\\/])?[^():]+):(\d+)(?::(\d+))?\)?\s*$")
            .expect("Failed to compile stack-frame regex")
    })
}

/// Compiler/linter style diagnostic anchored at the start of the line:
/// `<path>:<line>[:<col>][: message]`. The portion after the path must be
/// purely digits (with an optional `:<digits>` column) before a colon,
/// whitespace, or end-of-line boundary, so a drive-letter colon or a
/// mid-path colon never splits the match.
fn colon_delimited_regex() -> &'static Regex {
    COLON_DELIMITED_REGEX.get_or_init(|| {
        Regex::new(r"^\s*((?:[A-Za-z]:[\\/])?[^:\s]+):(\d+)(?::(\d+))?(?::|\s|$)")
            .expect("Failed to compile colon-delimited regex")
    })
}

/// Generic fallback: any token of the form `<path-like>:<digits>[:<digits>]`
/// anywhere in the line.
fn path_token_regex() -> &'static Regex {
    PATH_TOKEN_REGEX.get_or_init(|| {
        Regex::new(r#"((?:[A-Za-z]:[\\/])?[^\s:'",()\[\]<>]+):(\d+)(?::(\d+))?"#)
            .expect("Failed to compile path-token regex")
    })
}

fn extension_regex() -> &'static Regex {
    EXTENSION_REGEX.get_or_init(|| {
        Regex::new(r"\.[A-Za-z][A-Za-z0-9_]*$").expect("Failed to compile extension regex")
    })
}

/// A token qualifies as a path when it carries a separator or ends in a
/// file extension. Keeps `host:port` and timestamp tokens out of the match.
fn looks_like_path(candidate: &str) -> bool {
    candidate.contains('/') || candidate.contains('\\') || extension_regex().is_match(candidate)
}

/// Removes backslash escapes from a quoted path (`\"` -> `"`, `\\` -> `\`).
fn unescape_quoted(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

/// Validates the numeric parts and assembles a `Location`.
/// Returns None for line 0, lines beyond `MAX_LINE_NUMBER`, or empty paths;
/// a column of 0 is dropped but the location survives.
fn build_location(path: &str, line: &str, column: Option<&str>) -> Option<Location> {
    if path.is_empty() {
        return None;
    }
    let line: usize = line.parse().ok()?;
    if line == 0 || line > MAX_LINE_NUMBER {
        return None;
    }
    let column = column
        .and_then(|c| c.parse::<usize>().ok())
        .filter(|&c| c > 0);
    Some(Location {
        file: path.to_string(),
        line,
        column,
    })
}

/// One traceback dialect's frame-line convention.
///
/// Each variant is a pure `line -> Option<Location>` matcher; the set is
/// tried in [`Dialect::priority_order`] so a precise convention is never
/// shadowed by the generic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `File "app.py", line 42, in run`
    QuotedFile,
    /// `    at handler (server.js:88)`
    StackFrame,
    /// `src/main.rs:10:5: error: ...`
    ColonDelimited,
    /// Any `<path-like>:<digits>` token elsewhere in the line
    PathToken,
}

impl Dialect {
    /// Fixed matching order, most specific first.
    pub fn priority_order() -> &'static [Dialect] {
        &[
            Dialect::QuotedFile,
            Dialect::StackFrame,
            Dialect::ColonDelimited,
            Dialect::PathToken,
        ]
    }

    /// Applies this dialect's rule to a single line.
    pub fn apply(&self, line: &str) -> Option<Location> {
        match self {
            Dialect::QuotedFile => {
                let caps = quoted_file_regex().captures(line)?;
                let path = unescape_quoted(caps.get(1)?.as_str());
                build_location(&path, caps.get(2)?.as_str(), None)
            }
            Dialect::StackFrame => {
                let caps = stack_frame_regex().captures(line)?;
                let path = caps.get(1)?.as_str().trim();
                if !looks_like_path(path) {
                    return None;
                }
                build_location(path, caps.get(2)?.as_str(), caps.get(3).map(|m| m.as_str()))
            }
            Dialect::ColonDelimited => {
                let caps = colon_delimited_regex().captures(line)?;
                let path = caps.get(1)?.as_str();
                if !looks_like_path(path) {
                    return None;
                }
                build_location(path, caps.get(2)?.as_str(), caps.get(3).map(|m| m.as_str()))
            }
            Dialect::PathToken => {
                for caps in path_token_regex().captures_iter(line) {
                    let path = match caps.get(1) {
                        Some(m) => m.as_str(),
                        None => continue,
                    };
                    if !looks_like_path(path) {
                        continue;
                    }
                    if let Some(location) =
                        build_location(path, &caps[2], caps.get(3).map(|m| m.as_str()))
                    {
                        return Some(location);
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_file_matches_python_frame() {
        let loc = Dialect::QuotedFile
            .apply(r#"  File "app.py", line 42, in run"#)
            .unwrap();
        assert_eq!(loc, Location::new("app.py", 42));
        assert_eq!(loc.column, None);
    }

    #[test]
    fn quoted_file_unescapes_path() {
        let loc = Dialect::QuotedFile
            .apply(r#"  File "dir\\sub\"quoted\".py", line 3, in <module>"#)
            .unwrap();
        assert_eq!(loc.file, r#"dir\sub"quoted".py"#);
        assert_eq!(loc.line, 3);
    }

    #[test]
    fn stack_frame_matches_parenthesised_form() {
        let loc = Dialect::StackFrame
            .apply("    at handler (server.js:88)")
            .unwrap();
        assert_eq!(loc, Location::new("server.js", 88));
    }

    #[test]
    fn stack_frame_matches_bare_form_with_column() {
        let loc = Dialect::StackFrame
            .apply("    at /srv/app/lib.js:10:4")
            .unwrap();
        assert_eq!(loc.file, "/srv/app/lib.js");
        assert_eq!(loc.line, 10);
        assert_eq!(loc.column, Some(4));
    }

    #[test]
    fn stack_frame_keeps_windows_drive() {
        let loc = Dialect::StackFrame
            .apply(r"    at Object.<anonymous> (C:\proj\x.js:5:1)")
            .unwrap();
        assert_eq!(loc.file, r"C:\proj\x.js");
        assert_eq!(loc.line, 5);
    }

    #[test]
    fn stack_frame_ignores_non_source_frames() {
        assert_eq!(Dialect::StackFrame.apply("    at Promise.all (index 0)"), None);
        assert_eq!(Dialect::StackFrame.apply("    at native code"), None);
    }

    #[test]
    fn colon_delimited_matches_compiler_diagnostic() {
        let loc = Dialect::ColonDelimited
            .apply("src/main.rs:10:5: error: expected one of `!` or `::`")
            .unwrap();
        assert_eq!(loc.file, "src/main.rs");
        assert_eq!(loc.line, 10);
        assert_eq!(loc.column, Some(5));
    }

    #[test]
    fn colon_delimited_keeps_windows_drive() {
        let loc = Dialect::ColonDelimited.apply(r"C:\Users\x\a.py:5").unwrap();
        assert_eq!(loc.file, r"C:\Users\x\a.py");
        assert_eq!(loc.line, 5);
    }

    #[test]
    fn colon_delimited_rejects_host_port() {
        assert_eq!(Dialect::ColonDelimited.apply("localhost:8080"), None);
    }

    #[test]
    fn path_token_finds_reference_mid_line() {
        let loc = Dialect::PathToken
            .apply("thread 'main' panicked at src/main.rs:10:5:")
            .unwrap();
        assert_eq!(loc.file, "src/main.rs");
        assert_eq!(loc.line, 10);
        assert_eq!(loc.column, Some(5));
    }

    #[test]
    fn path_token_skips_timestamps() {
        assert_eq!(Dialect::PathToken.apply("12:30:45 request finished"), None);
        let loc = Dialect::PathToken
            .apply("12:30:45 error raised at lib/worker.py:7")
            .unwrap();
        assert_eq!(loc.file, "lib/worker.py");
        assert_eq!(loc.line, 7);
    }

    #[test]
    fn line_number_cap_rejects_absurd_values() {
        assert_eq!(Dialect::ColonDelimited.apply("file.py:99999999999"), None);
        assert_eq!(Dialect::PathToken.apply("see file.py:99999999999"), None);
    }

    #[test]
    fn line_zero_is_not_a_reference() {
        assert_eq!(Dialect::ColonDelimited.apply("file.py:0"), None);
    }

    #[test]
    fn zero_column_is_dropped_but_location_kept() {
        let loc = Dialect::ColonDelimited.apply("src/lib.rs:7:0: warning").unwrap();
        assert_eq!(loc.line, 7);
        assert_eq!(loc.column, None);
    }
}
