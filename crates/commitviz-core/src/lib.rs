//! Commit graph construction for commitviz.
//!
//! This crate walks a repository's loose object store from a starting
//! commit and assembles the [`CommitGraph`] of everything reachable from it.
//! It also resolves branch names to their head commits.

mod builder;
mod error;
mod graph;
mod refs;

pub use builder::{GraphBuilder, build_graph};
pub use error::{CoreError, CoreResult};
pub use graph::CommitGraph;
pub use refs::resolve_branch;

pub use commitviz_commit::CommitRecord;
pub use commitviz_object::{LooseObjectStore, ObjectError, ObjectId, ObjectReader};
