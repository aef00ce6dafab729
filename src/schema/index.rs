//! Edge-type lookup table built once from a schema mapping

use super::mapping::{Label, SchemaMapping};
use crate::writer::sanitize;
use std::collections::{BTreeMap, BTreeSet};

/// Resolved endpoint types for one relationship label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTypeInfo {
    /// Sanitized, lowercase source entity type
    pub source_type: String,
    /// Sanitized, lowercase target entity type
    pub target_type: String,
    /// Relationship name override, stored as declared
    pub output_label: Option<String>,
}

/// Immutable lookup built from a [`SchemaMapping`].
///
/// Holds the edge-type table keyed by sanitized lowercase relationship
/// label, and the set of declared node labels.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    edge_types: BTreeMap<String, EdgeTypeInfo>,
    node_labels: BTreeSet<String>,
}

impl SchemaIndex {
    /// Walk the mapping and resolve every edge and node declaration.
    ///
    /// Edge entries without both endpoint types are left out of the table.
    /// When two entries resolve to the same label, the first in logical-name
    /// order wins.
    pub fn build(mapping: &SchemaMapping) -> Self {
        let mut index = Self::default();

        for (name, entry) in mapping.entries() {
            let Some(label) = entry.input_label.as_ref().and_then(Label::canonical) else {
                tracing::warn!(entry = name, "schema entry has no input label, skipping");
                continue;
            };

            if entry.is_node() {
                index.node_labels.insert(sanitize(label));
                continue;
            }
            if !entry.is_edge() {
                continue;
            }

            let source = entry.source.as_ref().and_then(Label::canonical);
            let target = entry.target.as_ref().and_then(Label::canonical);
            let (Some(source), Some(target)) = (source, target) else {
                tracing::warn!(
                    entry = name,
                    label,
                    "incomplete schema: edge type has no source or target, skipping"
                );
                continue;
            };

            let key = sanitize(label);
            if index.edge_types.contains_key(&key) {
                tracing::warn!(
                    entry = name,
                    label = %key,
                    "edge label already declared by another entry, keeping the first"
                );
                continue;
            }

            index.edge_types.insert(
                key,
                EdgeTypeInfo {
                    source_type: sanitize(source),
                    target_type: sanitize(target),
                    output_label: entry.output_label.clone(),
                },
            );
        }

        tracing::debug!(
            edge_types = index.edge_types.len(),
            node_labels = index.node_labels.len(),
            "built schema index"
        );
        index
    }

    /// Look up an edge label (matched case-insensitively)
    pub fn edge_type(&self, label: &str) -> Option<&EdgeTypeInfo> {
        self.edge_types.get(&label.to_lowercase())
    }

    /// Iterate the edge-type table in label order
    pub fn edge_types(&self) -> impl Iterator<Item = (&str, &EdgeTypeInfo)> {
        self.edge_types.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn edge_type_count(&self) -> usize {
        self.edge_types.len()
    }

    /// Whether a node label (namespace already stripped) is declared
    pub fn has_node_label(&self, label: &str) -> bool {
        self.node_labels.contains(&sanitize(label))
    }

    pub fn node_labels(&self) -> impl Iterator<Item = &str> {
        self.node_labels.iter().map(String::as_str)
    }
}
