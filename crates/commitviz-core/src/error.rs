//! Core error types.

use std::path::PathBuf;

use commitviz_commit::CommitError;
use commitviz_object::{ObjectError, ObjectId};
use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Object store error.
    #[error(transparent)]
    Object(#[from] ObjectError),

    /// A reachable commit could not be decoded.
    #[error("malformed commit {id}: {source}")]
    MalformedCommit {
        /// The commit being decoded.
        id: ObjectId,
        /// The decoder error.
        source: CommitError,
    },

    /// Branch has no loose or packed ref.
    #[error("branch {branch} not found in {path}")]
    BranchNotFound {
        /// The requested branch.
        branch: String,
        /// The ref path that was probed.
        path: PathBuf,
    },

    /// Ref file holds no identifier.
    #[error("ref file is empty: {0}")]
    EmptyRef(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Returns true if a referenced object was missing from storage.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Object(e) if e.is_not_found())
    }

    /// Returns true if a stored object failed to decompress.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Object(e) if e.is_corrupt())
    }

    /// Returns true if a commit header was malformed.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedCommit { .. })
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
