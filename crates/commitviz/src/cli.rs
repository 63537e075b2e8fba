//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Draw the commit graph of a Git repository straight from its object store.
#[derive(Debug, Parser)]
#[command(name = "commitviz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: nearest commitviz.toml)
    #[arg(short = 'C', long, global = true, env = "COMMITVIZ_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the commit graph as a diagram description
    Graph(commands::graph::GraphArgs),

    /// Render the commit graph to an image with PlantUML
    Render(commands::render::RenderArgs),

    /// Write a default commitviz.toml
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config_path = self.config.as_deref();
        match self.command {
            Commands::Graph(args) => commands::graph::run(args, config_path),
            Commands::Render(args) => commands::render::run(args, config_path),
            Commands::Init(args) => commands::init::run(&args),
        }
    }
}
