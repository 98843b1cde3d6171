//! Unit tests for the logging subsystem.

use std::fs;

use super::{types::*, *};

#[test]
fn test_logger_config_defaults() {
    let config = LoggerConfig::default();
    assert_eq!(config.service_name, "(bqfuzz)");
    assert!(!config.stdout_config.json_format);
    assert!(config.file_logging_config.is_none());
}

#[test]
fn test_logger_config_builder_pattern() {
    let config = LoggerConfig::new("test-service".to_string())
        .with_json_logging(true)
        .with_file_logging(
            FileLoggingConfig::new("/tmp/logs".into(), "corpus".to_string())
                .with_json_format(true),
        );

    assert_eq!(config.service_name, "test-service");
    assert!(config.stdout_config.json_format);

    let file_config = config.file_logging_config.expect("file logging set");
    assert_eq!(file_config.file_name_prefix, "corpus");
    assert!(file_config.json_format);
}

#[test]
fn test_init_fails_when_log_dir_is_a_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, b"").expect("write");

    let config = LoggerConfig::new("test-service".to_string())
        .with_file_logging(FileLoggingConfig::new(blocker, "corpus".to_string()));

    let result = init(config);
    assert!(matches!(result, Err(LoggingError::Appender(_))));
}
