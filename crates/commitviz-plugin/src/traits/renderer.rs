//! Image renderer trait.

use std::path::Path;

use super::Plugin;
use crate::PluginResult;

/// Renders a diagram description file into an image.
pub trait ImageRenderer: Plugin {
    /// Renders `source` so that the image lands at `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer is unavailable or fails.
    fn render(&self, source: &Path, output: &Path) -> PluginResult<()>;
}
