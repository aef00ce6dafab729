//! Edge records

use super::node::{Properties, PropertyValue};
use serde::{Deserialize, Serialize};

/// A directed edge record as produced by a data adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier of the source node
    pub source_id: String,
    /// Identifier of the target node
    pub target_id: String,
    /// Relationship label, matched against the schema's input labels
    pub label: String,
    /// Additional properties
    #[serde(default)]
    pub properties: Properties,
}

impl Edge {
    /// Create an edge with no properties
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            label: label.into(),
            properties: Properties::new(),
        }
    }

    /// Add a property to the edge
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}
