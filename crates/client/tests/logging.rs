//! File logging setup. Kept in its own test binary: the subscriber is global.

use buster_client::ClientConfig;
use buster_client::logging::{LOG_FILE, setup_logging};

#[test]
fn log_dir_is_created_and_receives_output() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("nested").join("logs");
    let config = ClientConfig {
        log_filter: Some("info".to_owned()),
        log_dir: Some(dir.clone()),
        ..ClientConfig::default()
    };

    let guard = setup_logging(&config).unwrap();
    assert!(guard.is_some());
    tracing::info!("hello from the test");
    drop(guard);

    let contents = std::fs::read_to_string(dir.join(LOG_FILE)).unwrap();
    assert!(contents.contains("hello from the test"));
}
