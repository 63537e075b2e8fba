//! CLI commands.

pub mod graph;
pub mod init;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::{debug, info};

use commitviz_config::{Config, ConfigError, find_and_load_config, load_config};
use commitviz_core::{CommitGraph, GraphBuilder, LooseObjectStore, ObjectId, resolve_branch};
use commitviz_formatter_mermaid::MermaidFormatter;
use commitviz_formatter_plantuml::PlantUmlFormatter;
use commitviz_plugin::{DiagramFormatter, FormatterConfig};

/// Where the walk starts.
#[derive(Debug, Args)]
pub struct StartArgs {
    /// Branch whose head starts the walk (default: config `default_branch`)
    #[arg(short, long, conflicts_with = "commit")]
    pub branch: Option<String>,

    /// Commit identifier to start from instead of a branch
    #[arg(long)]
    pub commit: Option<String>,
}

/// Loads the explicit configuration file, or the nearest one, or defaults.
fn load_settings(config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        return load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }

    match find_and_load_config() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e).context("failed to load configuration"),
    }
}

/// Creates the formatter registered under `name`.
fn create_formatter(name: &str) -> Result<Box<dyn DiagramFormatter>> {
    match name {
        "plantuml" => Ok(Box::new(PlantUmlFormatter::new())),
        "mermaid" => Ok(Box::new(MermaidFormatter::new())),
        other => bail!("unknown formatter: {other}"),
    }
}

/// Formatter options from configuration.
fn formatter_config(config: &Config) -> FormatterConfig {
    FormatterConfig {
        short_id_len: config.formatter.short_id_len,
        include_message: config.formatter.include_message,
    }
}

/// Opens the repository and walks its history from the requested start.
fn load_graph(repo: &Path, start: &StartArgs, config: &Config) -> Result<CommitGraph> {
    let store = LooseObjectStore::open(repo)
        .with_context(|| format!("failed to open repository {}", repo.display()))?;

    let (start_id, start_label) = if let Some(commit) = &start.commit {
        (ObjectId::new(commit.trim()), format!("commit {commit}"))
    } else {
        let branch = start.branch.as_deref().unwrap_or(&config.default_branch);
        let head = resolve_branch(store.git_dir(), branch).with_context(|| {
            format!(
                "failed to resolve branch {branch} in repository {}",
                repo.display()
            )
        })?;
        (head, format!("branch {branch}"))
    };

    info!(repo = ?repo, start = %start_id, "building commit graph");

    GraphBuilder::new(&store).build(&start_id).with_context(|| {
        format!(
            "failed to build commit graph for repository {} starting at {start_label} ({start_id})",
            repo.display()
        )
    })
}
