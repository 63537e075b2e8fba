//! Diagram formatter trait.

use commitviz_core::CommitGraph;
use serde::{Deserialize, Serialize};

use super::Plugin;

/// Configuration for diagram formatters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Number of identifier characters used for node names.
    pub short_id_len: usize,

    /// Include commit messages in node labels.
    pub include_message: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            short_id_len: 7,
            include_message: true,
        }
    }
}

/// Formats a commit graph as a diagram description.
///
/// Implementations emit one node per commit and one edge per parent link,
/// pointing from the parent to the child.
pub trait DiagramFormatter: Plugin {
    /// Formats the graph into diagram source text.
    fn format(&self, graph: &CommitGraph, config: &FormatterConfig) -> String;

    /// Returns the file extension for the output (e.g., "puml").
    fn extension(&self) -> &'static str;
}
