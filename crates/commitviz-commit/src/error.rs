//! Commit decoding error types.

use thiserror::Error;

/// Commit decoding errors.
#[derive(Debug, Error)]
pub enum CommitError {
    /// A `parent` header line carries no identifier.
    #[error("malformed parent header on line {line_number}: {line:?}")]
    MalformedParent {
        /// One-based line number within the object.
        line_number: usize,
        /// The offending line.
        line: String,
    },
}

/// Result type for commit decoding.
pub type CommitResult<T> = Result<T, CommitError>;
