//! Loose object store reader for commitviz.
//!
//! This crate provides access to a repository's on-disk object store:
//! - [`ObjectId`]: Identifier addressing a stored object
//! - [`LooseObjectStore`]: Locates and decompresses object files
//! - [`ObjectReader`]: Source of decompressed object bytes

mod error;
mod id;
mod store;

pub use error::{ObjectError, ObjectResult};
pub use id::ObjectId;
pub use store::{LooseObjectStore, MAX_OBJECT_SIZE, ObjectReader, read_object};
