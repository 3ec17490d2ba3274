use tj_cli::reporters::{JsonReporter, TextReporter};
use tj_core::Location;

fn sample() -> Vec<Location> {
    vec![
        Location::new("app.py", 42),
        Location::with_column("src/main.rs", 10, 5),
    ]
}

#[test]
fn text_reporter_writes_numbered_lines() {
    let mut out = Vec::new();
    TextReporter.generate(&sample(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("1. app.py:42"));
    assert!(lines[1].contains("2. src/main.rs:10:5"));
}

#[test]
fn json_reporter_emits_count_and_locations() {
    let mut out = Vec::new();
    JsonReporter.generate(&sample(), &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["locations"][0]["file"], "app.py");
    assert_eq!(json["locations"][0]["line"], 42);
    assert!(json["locations"][0]["column"].is_null());
    assert_eq!(json["locations"][1]["column"], 5);
}

#[test]
fn json_reporter_handles_windows_paths() {
    let locations = vec![Location::new(r"C:\Users\x\a.py", 5)];
    let mut out = Vec::new();
    JsonReporter.generate(&locations, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["locations"][0]["file"], r"C:\Users\x\a.py");
}
