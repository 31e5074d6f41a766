//! Error types for generation, editing, and persistence operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fractal operations
#[derive(Debug)]
pub enum FractalError {
    /// A placement rule failed boundary validation
    InvalidRule {
        /// Index of the rule within its configuration
        index: usize,
        /// Explanation of the failed invariant
        reason: String,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rule index exceeds the current rule sequence
    InvalidRuleIndex {
        /// The invalid rule index
        index: usize,
        /// Number of rules in the sequence
        rule_count: usize,
    },

    /// Persisted or shared state could not be decoded
    ///
    /// Recoverable: the caller keeps its current in-memory state and
    /// surfaces a user-visible message. A load is never partially applied.
    InvalidFormat {
        /// Description of what made the document unacceptable
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRule { index, reason } => {
                write!(f, "Invalid rule at index {index}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidRuleIndex { index, rule_count } => {
                write!(
                    f,
                    "Rule index {index} is out of bounds (rule count: {rule_count})"
                )
            }
            Self::InvalidFormat { reason } => {
                write!(f, "Invalid format: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FractalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fractal results
pub type Result<T> = std::result::Result<T, FractalError>;

impl From<std::io::Error> for FractalError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for FractalError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidFormat {
            reason: err.to_string(),
        }
    }
}

impl From<base64::DecodeError> for FractalError {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidFormat {
            reason: format!("not valid URL-safe base64: {err}"),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FractalError {
    FractalError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid format error
pub fn invalid_format(reason: &impl ToString) -> FractalError {
    FractalError::InvalidFormat {
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to a file system error
pub fn file_system_error(
    path: &std::path::Path,
    operation: &'static str,
    source: std::io::Error,
) -> FractalError {
    FractalError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
