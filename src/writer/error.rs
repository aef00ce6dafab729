//! Error types for fact writing

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or appending facts
#[derive(Debug, Error)]
pub enum WriterError {
    /// The edge label has no entry in the schema's edge-type table
    #[error("unresolved edge type '{label}' for edge {source_id} -> {target_id}")]
    UnresolvedEdgeType {
        label: String,
        source_id: String,
        target_id: String,
    },

    #[error("path prefix must be relative and stay under the output root: {0}")]
    InvalidPrefix(PathBuf),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for writer operations
pub type WriterResult<T> = Result<T, WriterError>;

/// Errors that can occur while loading writer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
