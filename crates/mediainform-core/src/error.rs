//! Error types for mediainform-core.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures that stop a report from being normalized.
///
/// Field-level problems never show up here; they are absorbed by the
/// coercion helpers and surface as zero values in the typed records.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The provider could not be loaded.
    #[error("provider not loaded: {provider}")]
    NotLoaded { provider: String },

    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external tool failed to execute.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// The provider could not open the file.
    #[error("can't open file: {}", path.display())]
    OpenFailed { path: PathBuf },

    /// The provider's report did not have the expected shape.
    #[error("malformed report: {0}")]
    Report(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a provider not loaded error.
    pub fn not_loaded(provider: impl Into<String>) -> Self {
        Self::NotLoaded {
            provider: provider.into(),
        }
    }

    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create an open failure error.
    pub fn open_failed(path: impl Into<PathBuf>) -> Self {
        Self::OpenFailed { path: path.into() }
    }
}
