//! The process log file written after `logging::init`.
//!
//! Installs the global subscriber, so this file holds a single test.

use calc_repl::commands::CommandProcessor;
use calc_repl::config::Config;
use calc_repl::logging;
use std::fs;

#[test]
fn commands_are_written_to_the_log_file() {
    std::env::remove_var("RUST_LOG");
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        logging_path: dir.path().join("logging").join("app.log"),
        ..Config::default()
    };
    logging::init(&config).unwrap();
    logging::init(&config).unwrap();

    let mut processor = CommandProcessor::new(None);
    let mut out = Vec::new();
    for line in ["history", "add 2 3", "divide 10 0", "undo", "clear", "exit"] {
        processor.handle_line(line, &mut out).unwrap();
    }

    let log = fs::read_to_string(&config.logging_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    for expected in [
        "INFO logging to file:",
        "WARN No operations in history.",
        "INFO Performed Operation: Add(2.0, 3.0)",
        "ERROR Error: Division by zero.",
        "INFO Undid operation: Add(2.0, 3.0)",
        "INFO History cleared.",
        "INFO Program exited.",
    ] {
        assert!(lines.iter().any(|l| l.contains(expected)), "missing `{expected}` in:\n{log}");
    }
    assert_eq!(lines.iter().filter(|l| l.contains("logging to file:")).count(), 1);
    for line in &lines {
        let stamp = line.get(..23).unwrap_or_default();
        assert!(
            chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S%.3f").is_ok(),
            "bad timestamp in `{line}`"
        );
        assert!(!line.contains('\u{1b}'), "ANSI escape in `{line}`");
    }
}
