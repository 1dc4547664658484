//! init_tracing installs the global subscriber, so it gets its own test binary.

use std::fs;

use photo_relay_bot::init_tracing;
use tempfile::TempDir;

#[test]
fn test_init_tracing_creates_nested_log_path() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("logs").join("nested").join("relay.log");

    init_tracing(log_path.to_str().unwrap()).expect("init_tracing");
    tracing::error!(approval_id = "abc", "relay log line");

    let contents = fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("relay log line"), "{}", contents);
    assert!(contents.contains("approval_id"), "{}", contents);

    assert!(init_tracing(log_path.to_str().unwrap()).is_err());
}
