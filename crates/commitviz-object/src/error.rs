//! Object store error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::ObjectId;

/// Object store errors.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// No object file exists for the identifier.
    #[error("object {id} not found at {path}")]
    NotFound {
        /// The requested identifier.
        id: ObjectId,
        /// The path that was probed.
        path: PathBuf,
    },

    /// The object file could not be decompressed.
    #[error("object {id} is corrupt: {source}")]
    Corrupt {
        /// The requested identifier.
        id: ObjectId,
        /// The underlying decompression error.
        source: std::io::Error,
    },

    /// The identifier cannot be mapped to a storage path.
    #[error("invalid object id: {0:?}")]
    InvalidId(String),

    /// The path is neither a working tree nor a git directory.
    #[error("not a git repository: {0}")]
    NotARepo(PathBuf),

    /// IO error while reading an object file.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// The object file path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
}

impl ObjectError {
    /// Returns true if the object file was absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the object file failed to decompress.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

/// Result type for object store operations.
pub type ObjectResult<T> = Result<T, ObjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ObjectError::NotFound {
            id: ObjectId::new("abc123"),
            path: PathBuf::from("/repo/objects/ab/c123"),
        };
        assert_eq!(
            err.to_string(),
            "object abc123 not found at /repo/objects/ab/c123"
        );
        assert!(err.is_not_found());
        assert!(!err.is_corrupt());
    }

    #[test]
    fn test_corrupt_display() {
        let err = ObjectError::Corrupt {
            id: ObjectId::new("abc123"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad header"),
        };
        assert_eq!(err.to_string(), "object abc123 is corrupt: bad header");
        assert!(err.is_corrupt());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_id_display() {
        let err = ObjectError::InvalidId("ab".to_string());
        assert_eq!(err.to_string(), "invalid object id: \"ab\"");
    }

    #[test]
    fn test_not_a_repo_display() {
        let err = ObjectError::NotARepo(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "not a git repository: /tmp/not-git");
    }

    #[test]
    fn test_error_is_debug() {
        let err = ObjectError::InvalidId(String::new());
        let debug = format!("{err:?}");
        assert!(debug.contains("InvalidId"));
    }
}
