//! Writer configuration

use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default fact file extension
pub const DEFAULT_EXTENSION: &str = "pl";

/// Settings for a [`FactWriter`](super::FactWriter).
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```yaml
/// output_dir: out/prolog
/// excluded_properties: [license, version, source]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Root directory for fact files; created if missing
    pub output_dir: PathBuf,
    /// Fact file extension, without the dot
    pub extension: String,
    /// Property keys never written, at any nesting depth
    pub excluded_properties: BTreeSet<String>,
    /// Create missing path-prefix directories on append
    pub create_dirs: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            extension: DEFAULT_EXTENSION.to_string(),
            excluded_properties: BTreeSet::new(),
            create_dirs: true,
        }
    }
}

impl WriterConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn from_yaml_str(input: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Add a property key to the exclusion set
    pub fn exclude(mut self, key: impl Into<String>) -> Self {
        self.excluded_properties.insert(key.into());
        self
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }
}
