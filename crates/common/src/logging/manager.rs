//! Logging initialization.

use thiserror::Error;
use tracing::*;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::layer,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    Layer,
};

use super::types::LoggerConfig;

/// Logging setup failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory or file could not be created.
    #[error("failed to create log file appender: {0}")]
    Appender(#[from] InitError),

    /// A global subscriber was already installed.
    #[error("failed to install global subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Initializes the logging subsystem with the provided config.
///
/// Console output goes to stderr. The default level is INFO and can be
/// overridden via `RUST_LOG`.
pub fn init(config: LoggerConfig) -> Result<(), LoggingError> {
    // Build the file appender first so a bad log dir fails before anything is installed.
    let file_appender = config
        .file_logging_config
        .as_ref()
        .map(|file_config| {
            RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(&file_config.file_name_prefix)
                .build(&file_config.directory)
                .map(|appender| (appender, file_config.json_format))
        })
        .transpose()?;

    let filt = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    // Configure console logging with JSON or compact format
    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(filt.clone())
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(filt.clone())
            .boxed()
    };

    // Build optional file logging layer
    let file_layer = file_appender.map(|(appender, json_format)| {
        if json_format {
            layer()
                .json()
                .with_writer(appender)
                .with_ansi(false) // No color codes in files
                .with_filter(filt.clone())
                .boxed()
        } else {
            layer()
                .compact()
                .with_writer(appender)
                .with_ansi(false) // No color codes in files
                .with_filter(filt.clone())
                .boxed()
        }
    });

    tracing_subscriber::registry()
        .with(stdout_sub)
        .with(file_layer)
        .try_init()?;

    info!(service_name = %config.service_name, "logging initialized");

    if let Some(file_config) = &config.file_logging_config {
        info!(
            log_dir = %file_config.directory.display(),
            log_prefix = %file_config.file_name_prefix,
            "file logging enabled"
        );
    }

    Ok(())
}
