//! Commit graph traversal.

use std::collections::HashSet;
use std::path::Path;

use commitviz_commit::CommitRecord;
use commitviz_object::{LooseObjectStore, ObjectId, ObjectReader};
use tracing::{debug, info};

use crate::{CommitGraph, CoreError, CoreResult};

/// Builds commit graphs from an object source.
pub struct GraphBuilder<'a, R: ObjectReader + ?Sized> {
    reader: &'a R,
}

impl<'a, R: ObjectReader + ?Sized> GraphBuilder<'a, R> {
    /// Creates a builder reading objects from `reader`.
    #[must_use]
    pub fn new(reader: &'a R) -> Self {
        Self { reader }
    }

    /// Collects every commit reachable from `start` by following parents.
    ///
    /// The walk is an explicit-stack depth-first search. Each identifier is
    /// read and decoded at most once, even when several children share it.
    ///
    /// # Errors
    ///
    /// Returns the first read or decode failure; no partial graph is
    /// returned.
    pub fn build(&self, start: &ObjectId) -> CoreResult<CommitGraph> {
        let mut graph = CommitGraph::new();
        let mut visited: HashSet<ObjectId> = HashSet::new();
        let mut frontier = vec![start.clone()];

        while let Some(id) = frontier.pop() {
            if !visited.insert(id.clone()) {
                continue;
            }

            let record = self.load(&id)?;
            debug!(%id, parents = record.parents.len(), "visited commit");

            frontier.extend(
                record
                    .parents
                    .iter()
                    .filter(|parent| !visited.contains(*parent))
                    .cloned(),
            );
            graph.insert(id, record);
        }

        info!(
            start = %start,
            commits = graph.len(),
            roots = graph.roots().count(),
            edges = graph.edge_count(),
            "built commit graph"
        );

        Ok(graph)
    }

    /// Reads and decodes a single commit.
    fn load(&self, id: &ObjectId) -> CoreResult<CommitRecord> {
        let bytes = self.reader.read(id)?;
        CommitRecord::from_bytes(&bytes).map_err(|source| CoreError::MalformedCommit {
            id: id.clone(),
            source,
        })
    }
}

/// Builds the commit graph reachable from `start` in the git directory
/// `repo_root`.
///
/// # Errors
///
/// Returns an error if any reachable object is missing, corrupt, or not a
/// well-formed commit.
pub fn build_graph(repo_root: impl AsRef<Path>, start: &ObjectId) -> CoreResult<CommitGraph> {
    let store = LooseObjectStore::new(repo_root.as_ref());
    GraphBuilder::new(&store).build(start)
}
