//! Error types for smartpunct

use thiserror::Error;

/// Result type alias for smartpunct operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
///
/// Scanning itself never fails; every error in this crate is a
/// configuration-load problem reported before any scan runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown setting: {0}")]
    UnknownKey(String),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("malformed line (expected key = value): {0}")]
    MalformedLine(String),

    #[error("empty exception fragment")]
    EmptyFragment,

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
