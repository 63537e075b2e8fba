//! Render command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use commitviz_formatter_plantuml::PlantUmlFormatter;
use commitviz_plugin::{DiagramFormatter, ImageRenderer};
use commitviz_renderer_plantuml::PlantUmlRenderer;

use super::{StartArgs, formatter_config, load_graph, load_settings};

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Repository (working tree or git directory)
    pub repo: PathBuf,

    /// Image to write (the `.puml` source is written next to it)
    pub output: PathBuf,

    #[command(flatten)]
    pub start: StartArgs,

    /// Path to plantuml.jar (default: config `renderer.jar`)
    #[arg(long)]
    pub jar: Option<PathBuf>,

    /// Java executable (default: config `renderer.java`)
    #[arg(long)]
    pub java: Option<PathBuf>,
}

/// Runs the render command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: RenderArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_settings(config_path)?;
    let graph = load_graph(&args.repo, &args.start, &config)?;

    let formatter = PlantUmlFormatter::new();
    let source = args.output.with_extension(formatter.extension());
    fs::write(&source, formatter.format(&graph, &formatter_config(&config)))
        .with_context(|| format!("failed to write {}", source.display()))?;

    let jar = args.jar.unwrap_or_else(|| config.renderer.jar.clone());
    let java = args.java.unwrap_or_else(|| config.renderer.java.clone());
    PlantUmlRenderer::new(jar)
        .with_java(java)
        .render(&source, &args.output)
        .with_context(|| format!("failed to render {}", args.output.display()))?;

    println!(
        "Commit graph ({} commits) saved to {}",
        graph.len(),
        args.output.display()
    );
    Ok(())
}
