//! PlantUML image renderer plugin.
//!
//! Runs `java -jar plantuml.jar` on a diagram source file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use commitviz_plugin::{ImageRenderer, Plugin, PluginError, PluginResult};
use tracing::{debug, warn};

/// Image formats PlantUML is asked to produce, keyed by file extension.
const OUTPUT_FORMATS: &[&str] = &["png", "svg", "eps", "pdf", "txt"];

/// Renders PlantUML sources through the PlantUML jar.
pub struct PlantUmlRenderer {
    /// Java executable.
    java: PathBuf,
    /// Path to `plantuml.jar`.
    jar: PathBuf,
}

impl PlantUmlRenderer {
    /// Creates a renderer using the given jar and `java` from `PATH`.
    #[must_use]
    pub fn new(jar: impl Into<PathBuf>) -> Self {
        Self {
            java: PathBuf::from("java"),
            jar: jar.into(),
        }
    }

    /// Sets the Java executable.
    #[must_use]
    pub fn with_java(mut self, java: impl Into<PathBuf>) -> Self {
        self.java = java.into();
        self
    }

    /// Returns the Java executable.
    #[must_use]
    pub fn java(&self) -> &Path {
        &self.java
    }

    /// Returns the jar path.
    #[must_use]
    pub fn jar(&self) -> &Path {
        &self.jar
    }

    /// Returns the PlantUML `-t` format for an output path.
    fn output_format(output: &Path) -> &'static str {
        output
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| {
                OUTPUT_FORMATS
                    .iter()
                    .find(|f| f.eq_ignore_ascii_case(ext))
                    .copied()
            })
            .unwrap_or("png")
    }
}

impl Plugin for PlantUmlRenderer {
    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Renders PlantUML diagrams to images with the PlantUML jar"
    }
}

impl ImageRenderer for PlantUmlRenderer {
    fn render(&self, source: &Path, output: &Path) -> PluginResult<()> {
        if !self.jar.is_file() {
            return Err(PluginError::NotFound(format!(
                "PlantUML jar not found at {}",
                self.jar.display()
            )));
        }

        let format = Self::output_format(output);
        let out_dir = match output.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::path::absolute(dir)?,
            _ => std::env::current_dir()?,
        };

        debug!(
            java = ?self.java,
            jar = ?self.jar,
            source = ?source,
            out_dir = ?out_dir,
            format,
            "running PlantUML"
        );

        let result = Command::new(&self.java)
            .arg("-jar")
            .arg(&self.jar)
            .arg(source)
            .arg(format!("-t{format}"))
            .arg("-o")
            .arg(&out_dir)
            .output()
            .map_err(|e| {
                PluginError::ExecutionFailed(format!(
                    "failed to execute {}: {e}",
                    self.java.display()
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            warn!(status = %result.status, "PlantUML failed");
            return Err(PluginError::ExecutionFailed(format!(
                "PlantUML exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        // PlantUML names the image after the source file.
        if let Some(stem) = source.file_stem() {
            let produced = out_dir.join(format!("{}.{format}", stem.to_string_lossy()));
            let wanted = out_dir.join(output.file_name().unwrap_or(stem));
            if produced != wanted && produced.exists() {
                fs::rename(&produced, &wanted)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn renderer_with_jar(temp_dir: &TempDir) -> PlantUmlRenderer {
        let jar = temp_dir.path().join("plantuml.jar");
        fs::write(&jar, b"not really a jar").unwrap();
        PlantUmlRenderer::new(jar)
    }

    #[test]
    fn test_new() {
        let renderer = PlantUmlRenderer::new("/opt/plantuml.jar");
        assert_eq!(renderer.java(), Path::new("java"));
        assert_eq!(renderer.jar(), Path::new("/opt/plantuml.jar"));
        assert_eq!(renderer.name(), "plantuml");
    }

    #[test]
    fn test_with_java() {
        let renderer = PlantUmlRenderer::new("plantuml.jar").with_java("/usr/bin/java");
        assert_eq!(renderer.java(), Path::new("/usr/bin/java"));
    }

    #[test]
    fn test_output_format() {
        assert_eq!(PlantUmlRenderer::output_format(Path::new("g.png")), "png");
        assert_eq!(PlantUmlRenderer::output_format(Path::new("g.SVG")), "svg");
        assert_eq!(PlantUmlRenderer::output_format(Path::new("g.jpeg")), "png");
        assert_eq!(PlantUmlRenderer::output_format(Path::new("graph")), "png");
    }

    #[test]
    fn test_missing_jar() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = PlantUmlRenderer::new(temp_dir.path().join("missing.jar"));

        let result = renderer.render(
            &temp_dir.path().join("graph.puml"),
            &temp_dir.path().join("graph.png"),
        );
        assert!(matches!(result, Err(PluginError::NotFound(_))));
    }

    #[test]
    fn test_missing_java() {
        let temp_dir = TempDir::new().unwrap();
        let renderer =
            renderer_with_jar(&temp_dir).with_java(temp_dir.path().join("no-such-java"));

        let result = renderer.render(
            &temp_dir.path().join("graph.puml"),
            &temp_dir.path().join("graph.png"),
        );
        match result {
            Err(PluginError::ExecutionFailed(msg)) => assert!(msg.contains("failed to execute")),
            other => panic!("Expected ExecutionFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = renderer_with_jar(&temp_dir).with_java("false");

        let result = renderer.render(
            &temp_dir.path().join("graph.puml"),
            &temp_dir.path().join("graph.png"),
        );
        match result {
            Err(PluginError::ExecutionFailed(msg)) => assert!(msg.contains("PlantUML exited")),
            other => panic!("Expected ExecutionFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_dotted_source_name_renames_its_own_image() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = renderer_with_jar(&temp_dir).with_java("true");
        // Image PlantUML would write for graph.v2.puml, next to a stale one.
        fs::write(temp_dir.path().join("graph.v2.png"), b"fresh").unwrap();
        fs::write(temp_dir.path().join("graph.png"), b"stale").unwrap();

        renderer
            .render(
                &temp_dir.path().join("graph.v2.puml"),
                &temp_dir.path().join("history.png"),
            )
            .unwrap();

        assert_eq!(fs::read(temp_dir.path().join("history.png")).unwrap(), b"fresh");
        assert_eq!(fs::read(temp_dir.path().join("graph.png")).unwrap(), b"stale");
        assert!(!temp_dir.path().join("graph.v2.png").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_success() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = renderer_with_jar(&temp_dir).with_java("true");

        let result = renderer.render(
            &temp_dir.path().join("graph.puml"),
            &temp_dir.path().join("graph.png"),
        );
        assert!(result.is_ok());
    }
}
