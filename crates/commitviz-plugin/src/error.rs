//! Plugin error types.

use thiserror::Error;

/// Plugin-related errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin or one of its external resources not found.
    #[error("plugin not found: {0}")]
    NotFound(String),

    /// Plugin execution failed.
    #[error("plugin execution failed: {0}")]
    ExecutionFailed(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
