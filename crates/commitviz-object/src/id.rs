//! Object identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier naming a stored object (a hexadecimal hash).
///
/// Any token is accepted as a value so that decoded references are kept
/// verbatim; only [`ObjectId::split`] enforces the storage format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first `len` characters of the identifier.
    #[must_use]
    pub fn short(&self, len: usize) -> &str {
        self.0
            .char_indices()
            .nth(len)
            .map_or(self.0.as_str(), |(end, _)| &self.0[..end])
    }

    /// Splits the identifier into its storage directory prefix and file name.
    ///
    /// Returns `None` unless the identifier is hexadecimal and at least three
    /// characters long.
    #[must_use]
    pub fn split(&self) -> Option<(&str, &str)> {
        if self.0.len() < 3 || !self.0.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(self.0.split_at(2))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ObjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
