//! Graph command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use super::{StartArgs, create_formatter, formatter_config, load_graph, load_settings};

/// Output format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// PlantUML diagram source
    Plantuml,
    /// Mermaid flowchart source
    Mermaid,
    /// The raw commit graph as JSON
    Json,
}

/// Arguments for the graph command.
#[derive(Debug, Args)]
pub struct GraphArgs {
    /// Repository (working tree or git directory)
    #[arg(default_value = ".")]
    pub repo: PathBuf,

    #[command(flatten)]
    pub start: StartArgs,

    /// Output format (default: config `formatter.name`)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the graph command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: GraphArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_settings(config_path)?;
    let graph = load_graph(&args.repo, &args.start, &config)?;

    let text = match args.format {
        Some(FormatArg::Json) => {
            serde_json::to_string_pretty(&graph).context("failed to serialize graph")? + "\n"
        }
        Some(FormatArg::Plantuml) => {
            create_formatter("plantuml")?.format(&graph, &formatter_config(&config))
        }
        Some(FormatArg::Mermaid) => {
            create_formatter("mermaid")?.format(&graph, &formatter_config(&config))
        }
        None => create_formatter(&config.formatter.name)?.format(&graph, &formatter_config(&config)),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = ?path, commits = graph.len(), "wrote diagram");
        }
        None => print!("{text}"),
    }

    Ok(())
}
