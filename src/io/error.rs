//! Error types and path context for puzzle generation and export

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Grid dimension is non-positive or exceeds the supported piece count
    InvalidDimension {
        /// Name of the offending dimension (`rows` or `cols`)
        parameter: &'static str,
        /// Provided value that failed validation
        value: i64,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An internal edge id does not appear in exactly two edge slots
    ///
    /// Signals a defect in id uniqueness or grid construction, never a
    /// recoverable runtime condition.
    InvariantViolation {
        /// Raw edge id that broke the pairing rule
        edge_id: u64,
        /// Number of slots the id was found in
        occurrences: usize,
        /// Description of the broken invariant
        reason: String,
    },

    /// The id supplier ran out of candidates within its search space
    Exhaustion {
        /// Number of ids requested
        requested: usize,
        /// Number of ids actually found
        found: usize,
        /// Upper bound of the exhausted search space
        limit: usize,
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

    /// Product of two neighboring piece ids does not fit the edge id type
    EdgeIdOverflow {
        /// First piece id
        left: u64,
        /// Second piece id
        right: u64,
    },

    /// Failed to serialize a puzzle view as CSV
    Export {
        /// Destination of the export
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
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

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid dimension '{parameter}' = {value}: {reason}")
            }
            Self::InvariantViolation {
                edge_id,
                occurrences,
                reason,
            } => {
                write!(
                    f,
                    "Invariant violated for edge {edge_id} ({occurrences} occurrences): {reason}"
                )
            }
            Self::Exhaustion {
                requested,
                found,
                limit,
            } => {
                write!(
                    f,
                    "Id supply exhausted: requested {requested} ids, found {found} below {limit}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EdgeIdOverflow { left, right } => {
                write!(f, "Edge id {left} * {right} overflows u64")
            }
            Self::Export { path, source } => {
                write!(f, "Failed to export CSV to '{}': {source}", path.display())
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

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Export { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<csv::Error> for PuzzleError {
    fn from(err: csv::Error) -> Self {
        Self::Export {
            path: PathBuf::from("<stream>"),
            source: err,
        }
    }
}

/// Attaches the file being worked on to I/O and CSV failures
pub trait WithPath<T> {
    /// Replace the placeholder path of a file system or export error
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path (and operation) applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<PuzzleError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            PuzzleError::FileSystem { source, .. } => PuzzleError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            PuzzleError::Export { source, .. } => PuzzleError::Export {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimension error
pub fn invalid_dimension(
    parameter: &'static str,
    value: i64,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidDimension {
        parameter,
        value,
        reason: reason.to_string(),
    }
}
