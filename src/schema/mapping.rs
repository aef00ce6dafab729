//! Schema mapping input types and loaders

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a schema mapping
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("IO error reading schema {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// How a logical type is represented in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    Node,
    Edge,
}

/// A label field that may be given as one string or as a list of strings.
///
/// When a list is given, the first element is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Single(String),
    Multi(Vec<String>),
}

impl Label {
    /// The canonical value, or None for an empty list or empty string
    pub fn canonical(&self) -> Option<&str> {
        let value = match self {
            Self::Single(s) => s.as_str(),
            Self::Multi(values) => values.first()?.as_str(),
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

/// One logical type declared in the schema.
///
/// Keys the writer does not need (`is_a`, `properties`, `description`, ...)
/// are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntry {
    #[serde(default)]
    pub represented_as: Option<Representation>,
    #[serde(default)]
    pub input_label: Option<Label>,
    #[serde(default)]
    pub source: Option<Label>,
    #[serde(default)]
    pub target: Option<Label>,
    /// Relationship name to write instead of the input label
    #[serde(default)]
    pub output_label: Option<String>,
}

impl SchemaEntry {
    /// A node entry
    pub fn node(input_label: impl Into<Label>) -> Self {
        Self {
            represented_as: Some(Representation::Node),
            input_label: Some(input_label.into()),
            source: None,
            target: None,
            output_label: None,
        }
    }

    /// An edge entry between two endpoint types
    pub fn edge(
        input_label: impl Into<Label>,
        source: impl Into<Label>,
        target: impl Into<Label>,
    ) -> Self {
        Self {
            represented_as: Some(Representation::Edge),
            input_label: Some(input_label.into()),
            source: Some(source.into()),
            target: Some(target.into()),
            output_label: None,
        }
    }

    /// Set the output label override
    pub fn with_output_label(mut self, output_label: impl Into<String>) -> Self {
        self.output_label = Some(output_label.into());
        self
    }

    pub fn is_edge(&self) -> bool {
        self.represented_as == Some(Representation::Edge)
    }

    pub fn is_node(&self) -> bool {
        self.represented_as == Some(Representation::Node)
    }
}

/// The resolved schema: logical type name to its declaration, in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaMapping {
    entries: BTreeMap<String, SchemaEntry>,
}

impl SchemaMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn with_entry(mut self, name: impl Into<String>, entry: SchemaEntry) -> Self {
        self.entries.insert(name.into(), entry);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: SchemaEntry) -> Option<SchemaEntry> {
        self.entries.insert(name.into(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.get(name)
    }

    /// Iterate entries in logical-name order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SchemaEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML schema document.
    ///
    /// Top-level keys whose value is not a mapping (e.g. a `Title:` line)
    /// are skipped.
    pub fn from_yaml_str(input: &str) -> SchemaResult<Self> {
        let raw: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(input)?;
        let mut mapping = Self::new();
        for (name, value) in raw {
            if !value.is_mapping() {
                tracing::debug!(name = %name, "skipping non-mapping schema key");
                continue;
            }
            let entry: SchemaEntry = serde_yaml::from_value(value)?;
            mapping.insert(name, entry);
        }
        Ok(mapping)
    }

    /// Parse a JSON schema document, skipping non-object top-level values.
    pub fn from_json_str(input: &str) -> SchemaResult<Self> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(input)?;
        let mut mapping = Self::new();
        for (name, value) in raw {
            if !value.is_object() {
                tracing::debug!(name = %name, "skipping non-object schema key");
                continue;
            }
            let entry: SchemaEntry = serde_json::from_value(value)?;
            mapping.insert(name, entry);
        }
        Ok(mapping)
    }

    /// Load a schema file: `.json` is parsed as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> SchemaResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}
