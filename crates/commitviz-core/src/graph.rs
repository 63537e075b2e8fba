//! The commit graph.

use std::collections::{BTreeMap, BTreeSet};
use std::collections::btree_map;

use commitviz_commit::CommitRecord;
use commitviz_object::ObjectId;
use serde::Serialize;

/// Mapping from commit identifier to its decoded record.
///
/// Keys are kept sorted so iteration order does not depend on the order in
/// which the traversal discovered commits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommitGraph {
    commits: BTreeMap<ObjectId, CommitRecord>,
}

impl CommitGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a commit, returning the record it replaced.
    pub fn insert(&mut self, id: ObjectId, record: CommitRecord) -> Option<CommitRecord> {
        self.commits.insert(id, record)
    }

    /// Returns the record for `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CommitRecord> {
        self.commits.get(id)
    }

    /// Returns true if `id` is in the graph.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.commits.contains_key(id)
    }

    /// Returns the number of commits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Returns true if the graph holds no commits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Iterates over commits in identifier order.
    pub fn iter(&self) -> btree_map::Iter<'_, ObjectId, CommitRecord> {
        self.commits.iter()
    }

    /// Returns the identifiers of commits without parents.
    pub fn roots(&self) -> impl Iterator<Item = &ObjectId> {
        self.commits
            .iter()
            .filter(|(_, record)| record.is_root())
            .map(|(id, _)| id)
    }

    /// Returns the total number of parent links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.commits.values().map(|record| record.parents.len()).sum()
    }

    /// Returns the shortest prefix length, at least `min_len`, that keeps
    /// every identifier in the graph distinct, parent references included.
    #[must_use]
    pub fn unique_prefix_len(&self, min_len: usize) -> usize {
        let ids: BTreeSet<&str> = self
            .commits
            .iter()
            .flat_map(|(id, record)| std::iter::once(id).chain(&record.parents))
            .map(ObjectId::as_str)
            .collect();

        // In sorted order the longest shared prefix is between neighbours.
        ids.iter()
            .zip(ids.iter().skip(1))
            .map(|(a, b)| {
                a.chars()
                    .zip(b.chars())
                    .take_while(|(x, y)| x == y)
                    .count()
                    + 1
            })
            .fold(min_len, usize::max)
    }
}

impl<'a> IntoIterator for &'a CommitGraph {
    type Item = (&'a ObjectId, &'a CommitRecord);
    type IntoIter = btree_map::Iter<'a, ObjectId, CommitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.commits.iter()
    }
}

impl FromIterator<(ObjectId, CommitRecord)> for CommitGraph {
    fn from_iter<I: IntoIterator<Item = (ObjectId, CommitRecord)>>(iter: I) -> Self {
        Self {
            commits: iter.into_iter().collect(),
        }
    }
}
