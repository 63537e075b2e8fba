//! Commit object decoding for commitviz.
//!
//! This crate turns the decompressed bytes of a commit object into a
//! [`CommitRecord`]: the ordered parent identifiers and the message text.

mod decode;
mod error;
mod record;

pub use decode::decode_commit;
pub use error::{CommitError, CommitResult};
pub use record::CommitRecord;
