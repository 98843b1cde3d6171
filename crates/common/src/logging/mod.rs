//! Logging subsystem built on `tracing-subscriber`.

pub mod manager;
pub mod types;

#[cfg(test)]
mod tests;

pub use manager::{init, LoggingError};
pub use types::{FileLoggingConfig, LoggerConfig, StdoutConfig};
