//! Error types for render configuration.

use thiserror::Error;

/// Errors that can occur while loading a [`RenderConfig`](crate::RenderConfig).
///
/// Rendering itself never fails; only configuration does.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid TOML or has the wrong shape.
    #[error("Failed to parse render configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but cannot be used in the rendered output.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
