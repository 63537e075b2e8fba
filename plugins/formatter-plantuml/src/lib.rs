//! PlantUML diagram formatter plugin.

use std::fmt::Write;

use commitviz_core::{CommitGraph, ObjectId};
use commitviz_plugin::{DiagramFormatter, FormatterConfig, Plugin};

/// PlantUML formatter.
///
/// Emits one `rectangle` per commit, labelled with its short identifier and
/// message, and one `parent --> child` arrow per parent link.
pub struct PlantUmlFormatter;

impl PlantUmlFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the diagram alias for a commit.
    fn alias(id: &ObjectId, short_len: usize) -> String {
        format!("c_{}", id.short(short_len))
    }

    /// Escapes text for use inside a quoted PlantUML label.
    ///
    /// Line breaks become the two characters `\n`, which PlantUML renders as
    /// a new line; quotes would end the label and are written as a Unicode
    /// escape.
    fn escape_label(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '"' => escaped.push_str("<U+0022>"),
                '\n' => escaped.push_str("\\n"),
                '\r' => {}
                '\t' => escaped.push(' '),
                c => escaped.push(c),
            }
        }
        escaped
    }
}

impl Default for PlantUmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PlantUmlFormatter {
    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Formats the commit graph as a PlantUML diagram"
    }
}

impl DiagramFormatter for PlantUmlFormatter {
    fn format(&self, graph: &CommitGraph, config: &FormatterConfig) -> String {
        let mut output = String::from("@startuml\n");
        let short_len = graph.unique_prefix_len(config.short_id_len);

        for (id, record) in graph {
            let short = id.short(short_len);
            let label = if config.include_message {
                format!("{short}: {}", Self::escape_label(&record.message))
            } else {
                short.to_string()
            };
            _ = writeln!(
                output,
                "rectangle \"{label}\" as {}",
                Self::alias(id, short_len)
            );
        }

        for (id, record) in graph {
            let child = Self::alias(id, short_len);
            for parent in &record.parents {
                _ = writeln!(output, "{} --> {child}", Self::alias(parent, short_len));
            }
        }

        output.push_str("@enduml\n");
        output
    }

    fn extension(&self) -> &'static str {
        "puml"
    }
}
