//! Error types and context management for solver operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Hand text could not be read as 13 tiles of one suit
    InvalidHand {
        /// The rejected input
        input: String,
        /// Explanation of what is wrong with it
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A known hand did not produce its known waits
    ///
    /// Indicates a defect in the decomposition search or in deduplication,
    /// never a transient condition.
    SelfCheckFailed {
        /// Hand under test
        hand: String,
        /// Expected block text
        expected: String,
        /// Block text actually produced
        actual: String,
    },

    /// A rendered wait does not describe a legal completion of its hand
    InconsistentWait {
        /// Hand the line belongs to
        hand: String,
        /// Offending rendered line
        line: String,
        /// What the check found
        reason: String,
    },

    /// Enumeration log could not be parsed
    MalformedLog {
        /// Log file path
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Two enumeration logs disagree
    LogsDiffer {
        /// First log
        left: PathBuf,
        /// Second log
        right: PathBuf,
        /// Summary of the disagreement
        reason: String,
    },

    /// Worker pool could not be created
    WorkerPool {
        /// Number of workers requested
        workers: usize,
        /// Underlying pool construction error
        source: rayon::ThreadPoolBuildError,
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

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHand { input, reason } => {
                write!(f, "Invalid hand '{input}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SelfCheckFailed {
                hand,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Self-check failed for {hand}\nexpected:\n{expected}actual:\n{actual}"
                )
            }
            Self::InconsistentWait { hand, line, reason } => {
                write!(f, "Inconsistent wait '{line}' for hand {hand}: {reason}")
            }
            Self::MalformedLog { path, line, reason } => {
                write!(
                    f,
                    "Malformed log '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::LogsDiffer {
                left,
                right,
                reason,
            } => {
                write!(
                    f,
                    "Logs '{}' and '{}' differ: {reason}",
                    left.display(),
                    right.display()
                )
            }
            Self::WorkerPool { workers, source } => {
                write!(f, "Failed to start {workers} workers: {source}")
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

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WorkerPool { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the operation touched
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with the file and operation involved
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add path and operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<SolverError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                SolverError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(new_path) = context.path {
                        *path = new_path;
                    }
                    if let Some(new_operation) = context.operation {
                        *operation = new_operation;
                    }
                }
                SolverError::MalformedLog { path, .. } => {
                    if let Some(new_path) = context.path {
                        *path = new_path;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            operation: Some(operation),
        })
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for SolverError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool {
            workers: 0,
            source: err,
        }
    }
}

/// Create an invalid hand error
pub fn invalid_hand(input: &impl ToString, reason: &impl ToString) -> SolverError {
    SolverError::InvalidHand {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an inconsistent wait error
pub fn inconsistent_wait(
    hand: &impl ToString,
    line: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InconsistentWait {
        hand: hand.to_string(),
        line: line.to_string(),
        reason: reason.to_string(),
    }
}
