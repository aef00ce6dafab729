//! Node records and typed property values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Typed property values
///
/// Deserialized untagged, so a plain JSON or YAML document maps onto the
/// variants directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<PropertyValue>),
    Object(Properties),
    Null,
}

impl PropertyValue {
    /// Null and the empty string carry no information and are never written.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// True for strings, numbers and booleans.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::String(_) | Self::Int(_) | Self::Float(_) | Self::Bool(_)
        )
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<Properties> for PropertyValue {
    fn from(map: Properties) -> Self {
        Self::Object(map)
    }
}

/// Properties collection, iterated in insertion order
pub type Properties = IndexMap<String, PropertyValue>;

/// A node record as produced by a data adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Adapter-side identifier (e.g. "ENSG00000012048", "CL:0000066")
    pub id: String,
    /// Entity label, optionally namespaced with '.' (e.g. "bio.Gene")
    pub label: String,
    /// Domain-specific properties
    #[serde(default)]
    pub properties: Properties,
}

impl Node {
    /// Create a node with no properties
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            properties: Properties::new(),
        }
    }

    /// Add a property to the node
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Label with any namespace stripped: the segment after the last '.'
    pub fn local_label(&self) -> &str {
        match self.label.rfind('.') {
            Some(idx) => &self.label[idx + 1..],
            None => &self.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_label_strips_namespace() {
        assert_eq!(Node::new("x", "bio.Gene").local_label(), "Gene");
        assert_eq!(Node::new("x", "a.b.Transcript").local_label(), "Transcript");
        assert_eq!(Node::new("x", "protein").local_label(), "protein");
    }

    #[test]
    fn absent_values() {
        assert!(PropertyValue::Null.is_absent());
        assert!(PropertyValue::from("").is_absent());
        assert!(!PropertyValue::from("x").is_absent());
        assert!(!PropertyValue::from(0_i64).is_absent());
        assert!(!PropertyValue::Array(Vec::new()).is_absent());
    }

    #[test]
    fn scalar_values() {
        assert!(PropertyValue::from("x").is_scalar());
        assert!(PropertyValue::from(0.5_f64).is_scalar());
        assert!(PropertyValue::from(false).is_scalar());
        assert!(!PropertyValue::Null.is_scalar());
        assert!(!PropertyValue::Array(Vec::new()).is_scalar());
        assert!(!PropertyValue::Object(Properties::new()).is_scalar());
    }

    #[test]
    fn properties_deserialize_in_document_order() {
        let node: Node = serde_json::from_str(
            r#"{"id": "BRCA1", "label": "gene", "properties": {"z": 1, "a": "x", "m": null}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = node.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(node.properties["z"], PropertyValue::Int(1));
        assert_eq!(node.properties["m"], PropertyValue::Null);
    }

    #[test]
    fn numbers_keep_their_kind() {
        let props: Properties =
            serde_json::from_str(r#"{"i": 3, "f": 0.9, "b": true, "l": [1, "a"], "o": {"k": "v"}}"#)
                .unwrap();
        assert_eq!(props["i"], PropertyValue::Int(3));
        assert_eq!(props["f"], PropertyValue::Float(0.9));
        assert_eq!(props["b"], PropertyValue::Bool(true));
        assert!(matches!(props["l"], PropertyValue::Array(ref v) if v.len() == 2));
        assert!(matches!(props["o"], PropertyValue::Object(ref m) if m["k"] == PropertyValue::from("v")));
    }

    #[test]
    fn missing_properties_default_to_empty() {
        let node: Node = serde_json::from_str(r#"{"id": "a", "label": "gene"}"#).unwrap();
        assert!(node.properties.is_empty());
    }
}
