//! Mermaid diagram formatter plugin.

use std::fmt::Write;

use commitviz_core::{CommitGraph, ObjectId};
use commitviz_plugin::{DiagramFormatter, FormatterConfig, Plugin};

/// Mermaid flowchart formatter.
///
/// Draws the graph bottom-to-top so that roots sit at the bottom and every
/// arrow points from a parent to its child.
pub struct MermaidFormatter;

impl MermaidFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn node_id(id: &ObjectId, short_len: usize) -> String {
        format!("c{}", id.short(short_len))
    }

    /// Escapes text for a quoted Mermaid label using entity codes.
    fn escape_label(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '#' => escaped.push_str("#35;"),
                '"' => escaped.push_str("#quot;"),
                '<' => escaped.push_str("#lt;"),
                '>' => escaped.push_str("#gt;"),
                '\n' => escaped.push_str("<br/>"),
                '\r' => {}
                c => escaped.push(c),
            }
        }
        escaped
    }
}

impl Default for MermaidFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for MermaidFormatter {
    fn name(&self) -> &'static str {
        "mermaid"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Formats the commit graph as a Mermaid flowchart"
    }
}

impl DiagramFormatter for MermaidFormatter {
    fn format(&self, graph: &CommitGraph, config: &FormatterConfig) -> String {
        let mut output = String::from("flowchart BT\n");
        let short_len = graph.unique_prefix_len(config.short_id_len);

        for (id, record) in graph {
            let short = id.short(short_len);
            let label = if config.include_message {
                format!("{short}: {}", Self::escape_label(&record.message))
            } else {
                short.to_string()
            };
            _ = writeln!(output, "    {}[\"{label}\"]", Self::node_id(id, short_len));
        }

        for (id, record) in graph {
            let child = Self::node_id(id, short_len);
            for parent in &record.parents {
                _ = writeln!(output, "    {} --> {child}", Self::node_id(parent, short_len));
            }
        }

        output
    }

    fn extension(&self) -> &'static str {
        "mmd"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commitviz_core::CommitRecord;

    fn commit(id: &str, parents: &[&str], message: &str) -> (ObjectId, CommitRecord) {
        let parents = parents.iter().map(|p| ObjectId::new(*p)).collect();
        (ObjectId::new(id), CommitRecord::new(parents, message))
    }

    #[test]
    fn test_plugin_metadata() {
        let formatter = MermaidFormatter::new();
        assert_eq!(formatter.name(), "mermaid");
        assert_eq!(formatter.extension(), "mmd");
        assert_eq!(
            formatter.description(),
            "Formats the commit graph as a Mermaid flowchart"
        );
    }

    #[test]
    fn test_basic_format() {
        let graph: CommitGraph = [
            commit("abcdef1000000", &[], "Initial commit"),
            commit("1234567000000", &["abcdef1000000"], "Second commit"),
        ]
        .into_iter()
        .collect();

        let output = MermaidFormatter.format(&graph, &FormatterConfig::default());

        insta::assert_snapshot!(output.trim_end(), @r#"
        flowchart BT
            c1234567["1234567: Second commit"]
            cabcdef1["abcdef1: Initial commit"]
            cabcdef1 --> c1234567
        "#);
    }

    #[test]
    fn test_merge_edges() {
        let graph: CommitGraph = [
            commit("ccc0000", &["aaa0000", "bbb0000"], "merge"),
            commit("aaa0000", &[], "a"),
            commit("bbb0000", &[], "b"),
        ]
        .into_iter()
        .collect();

        let output = MermaidFormatter.format(&graph, &FormatterConfig::default());
        let edges = output.lines().filter(|l| l.contains(" --> ")).count();

        assert_eq!(edges, 2);
        assert!(output.contains("caaa0000 --> cccc0000"));
        assert!(output.contains("cbbb0000 --> cccc0000"));
    }

    #[test]
    fn test_shared_short_prefix_stays_distinct() {
        let graph: CommitGraph = [
            commit("abcdef1aaaa", &[], "first"),
            commit("abcdef1bbbb", &["abcdef1aaaa"], "second"),
        ]
        .into_iter()
        .collect();

        let output = MermaidFormatter.format(&graph, &FormatterConfig::default());

        assert!(output.contains("cabcdef1a[\"abcdef1a: first\"]"));
        assert!(output.contains("cabcdef1b[\"abcdef1b: second\"]"));
        assert!(output.contains("cabcdef1a --> cabcdef1b"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(
            MermaidFormatter::escape_label("Fix \"<b>\" #12\nBody"),
            "Fix #quot;#lt;b#gt;#quot; #35;12<br/>Body"
        );
    }

    #[test]
    fn test_without_messages() {
        let graph: CommitGraph = [commit("abcdef1000000", &[], "hidden")]
            .into_iter()
            .collect();
        let config = FormatterConfig {
            include_message: false,
            ..FormatterConfig::default()
        };

        let output = MermaidFormatter.format(&graph, &config);
        assert!(output.contains("cabcdef1[\"abcdef1\"]"));
        assert!(!output.contains("hidden"));
    }
}
