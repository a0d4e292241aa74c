use anum_logger::{FileSink, LevelFilter, Logger, LoggerError};
use tempfile::tempdir;

#[test]
fn only_one_subscriber_is_installed_per_process() {
    let rejected = Logger::builder()
        .name("anum-shell")
        .env_filter("anum_executor=[[")
        .init()
        .expect_err("malformed filter should be rejected");
    assert!(matches!(rejected, LoggerError::InvalidConfiguration { .. }));

    // A rejected configuration must not claim the global slot.
    let logger = Logger::builder()
        .name("anum-shell")
        .env_filter("anum_executor=debug")
        .level(LevelFilter::WARN)
        .init()
        .expect("console logger should initialize");
    assert!(!logger.writes_files(), "stderr-only logger holds no file guard");
    tracing::debug!(target: "anum_executor", "search started");

    let dir = tempdir().expect("temp dir");
    let err = Logger::builder()
        .name("anum-shell")
        .file(FileSink::new(dir.path().join("logs")))
        .init()
        .expect_err("second subscriber should be refused");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
    assert!(err.to_string().starts_with("Tracing subscriber error"), "unexpected message: {err}");
}
