//! Integration tests for logger behavior.

use gradepoint::logger::{init_file_logging, set_level, set_level_from_str, Level};
use gradepoint::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_creates_parent_dirs() {
    let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("logs").join("gradepoint.log");

    assert!(init_file_logging(&path));
    // error level passes every filter, so parallel tests cannot hide it
    error!("written to file");

    let content = std::fs::read_to_string(&path).expect("log file should exist");
    assert!(content.contains("[ERROR] written to file"));
}
