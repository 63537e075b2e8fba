//! Plugin system for commitviz.
//!
//! This crate provides the plugin traits:
//! - [`Plugin`]: Base trait for all plugins
//! - [`DiagramFormatter`]: Turns a commit graph into a diagram description
//! - [`ImageRenderer`]: Turns a diagram description file into an image

mod error;
mod traits;

pub use error::{PluginError, PluginResult};
pub use traits::Plugin;
pub use traits::formatter::{DiagramFormatter, FormatterConfig};
pub use traits::renderer::ImageRenderer;
