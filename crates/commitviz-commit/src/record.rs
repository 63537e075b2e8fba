//! Decoded commit record.

use commitviz_object::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{CommitResult, decode_commit};

/// The parents and message of one commit object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Parent identifiers in header order, duplicates preserved.
    pub parents: Vec<ObjectId>,

    /// The commit message (everything after the header).
    pub message: String,
}

impl CommitRecord {
    /// Creates a new commit record.
    #[must_use]
    pub fn new(parents: Vec<ObjectId>, message: impl Into<String>) -> Self {
        Self {
            parents,
            message: message.into(),
        }
    }

    /// Decodes a record from decompressed object bytes.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, since
    /// commit messages may carry a legacy encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if a `parent` header is malformed.
    pub fn from_bytes(bytes: &[u8]) -> CommitResult<Self> {
        decode_commit(&String::from_utf8_lossy(bytes))
    }

    /// Returns true if the commit has no parents.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns true if the commit has more than one parent.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Returns the first line of the message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
