//! Configuration error types.

use std::path::PathBuf;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while resolving or binding configuration.
///
/// Binding errors are surfaced to the startup sequence and are fatal to
/// process initialization; an absent property file is not an error and
/// never reaches this type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A property file exists but could not be read.
    #[error("failed to read property file {path}: {source}")]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A non-blank, non-comment line has no `=` or `:` separator, or an
    /// empty key.
    #[error("malformed property in {} on line {line}: {content:?}", path.display())]
    InvalidLine {
        /// Path of the file containing the line, or `<inline>` for text
        /// parsed without a file.
        path: PathBuf,
        /// One-based line number within the file.
        line: usize,
        /// The offending line, verbatim.
        content: String,
    },

    /// A required key is absent from the resolved property set.
    #[error("missing required configuration key: {0}")]
    MissingKey(String),

    /// A key is present but its value does not bind to the expected type.
    #[error("invalid value {value:?} for key {key}: expected {expected}")]
    InvalidValue {
        /// The configuration key that failed to bind.
        key: String,
        /// The rejected value, verbatim.
        value: String,
        /// Description of the accepted values.
        expected: String,
    },
}

impl ConfigError {
    /// Attributes a malformed-line error to the file it came from; other
    /// variants pass through unchanged.
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            Self::InvalidLine { line, content, .. } => Self::InvalidLine {
                path: path.to_path_buf(),
                line,
                content,
            },
            other => other,
        }
    }

    /// Creates a new missing-key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey(key.into())
    }

    /// Creates a new invalid-value error.
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}
