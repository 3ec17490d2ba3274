#![cfg(unix)]

use tj_cli::input::{acquire, InputSource};
use tj_core::parser::TraceParser;

#[test]
fn wrapped_failing_command_yields_parseable_locations() {
    let script = "echo 'Traceback (most recent call last):' >&2; \
                  echo '  File \"worker.py\", line 9, in process' >&2; \
                  echo 'KeyError: job' >&2; \
                  exit 1";
    let source = InputSource::Command(vec![
        "sh".to_string(),
        "-c".to_string(),
        script.to_string(),
    ]);

    let text = acquire(source).unwrap();
    let locations = TraceParser::new().parse(&text);
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].file, "worker.py");
    assert_eq!(locations[0].line, 9);
}

#[test]
fn wrapped_unspawnable_command_surfaces_error() {
    let source = InputSource::Command(vec!["tracejump-no-such-binary-xyz".to_string()]);
    assert!(acquire(source).is_err());
}
