//! Smoke test for logging initialization with file output.

use suivote_rs::{init_logging, is_initialized, LogFormat, LoggingConfig};
use tempfile::TempDir;

#[test]
fn init_with_file_logging_creates_directory() {
    let dir = TempDir::new().expect("temp dir");
    let log_dir = dir.path().join("logs");

    let config = LoggingConfig {
        debug: true,
        trace: false,
        record_log: true,
        logging_dir: log_dir.to_string_lossy().into_owned(),
        format: LogFormat::Compact,
    };
    init_logging(&config);

    assert!(is_initialized());
    assert!(log_dir.is_dir());

    // Re-initialization is a no-op rather than a panic.
    init_logging(&config);
    tracing::info!("logging smoke test");
}
