//! FactWriter: turns node and edge records into fact lines and appends them

use super::config::WriterConfig;
use super::encode::encode_excluding;
use super::error::{WriterError, WriterResult};
use super::sanitize;
use super::sink::{Destination, OutputSink};
use crate::graph::{Edge, Node};
use crate::schema::SchemaIndex;
use std::borrow::Borrow;
use std::path::{Path, PathBuf};

/// Outcome of one batch write
#[derive(Debug, Clone, PartialEq)]
pub struct WriteSummary {
    /// Records rendered and appended
    pub records: usize,
    /// Fact lines appended, not counting the batch separator
    pub lines: usize,
    /// File the batch was appended to
    pub path: PathBuf,
}

/// Serializes graph records as facts.
///
/// Holds the schema index built at construction; every call after that is
/// independent of earlier ones.
#[derive(Debug)]
pub struct FactWriter {
    index: SchemaIndex,
    config: WriterConfig,
    sink: OutputSink,
}

impl FactWriter {
    /// Create a writer, creating the configured output directory.
    pub fn new(index: SchemaIndex, config: WriterConfig) -> WriterResult<Self> {
        let sink = OutputSink::new(&config.output_dir, &config.extension)?
            .with_create_dirs(config.create_dirs);
        Ok(Self {
            index,
            config,
            sink,
        })
    }

    pub fn index(&self) -> &SchemaIndex {
        &self.index
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Render a node: `<label>(<id>).` followed by its property facts.
    pub fn write_node(&self, node: &Node) -> Vec<String> {
        let label = sanitize(&node.local_label().to_lowercase());
        let id = sanitize(&node.id.to_lowercase());
        let head = format!("{label}({id})");
        encode_excluding(&head, &node.properties, &self.config.excluded_properties)
    }

    /// Render an edge:
    /// `<label>(<source_type>(<source_id>), <target_type>(<target_id>)).`
    /// followed by its property facts.
    ///
    /// Fails if the edge label is not in the schema's edge-type table.
    pub fn write_edge(&self, edge: &Edge) -> WriterResult<Vec<String>> {
        let label = edge.label.to_lowercase();
        let info = self
            .index
            .edge_type(&label)
            .ok_or_else(|| WriterError::UnresolvedEdgeType {
                label: edge.label.clone(),
                source_id: edge.source_id.clone(),
                target_id: edge.target_id.clone(),
            })?;

        let label = match &info.output_label {
            Some(output_label) => sanitize(&output_label.to_lowercase()),
            None => sanitize(&label),
        };
        let source_id = sanitize(&edge.source_id.to_lowercase());
        let target_id = sanitize(&edge.target_id.to_lowercase());

        let head = format!(
            "{label}({}({source_id}), {}({target_id}))",
            info.source_type, info.target_type
        );
        Ok(encode_excluding(
            &head,
            &edge.properties,
            &self.config.excluded_properties,
        ))
    }

    /// Render every node and append the batch to the node file.
    pub fn write_nodes<I>(&self, nodes: I, prefix: Option<&Path>) -> WriterResult<WriteSummary>
    where
        I: IntoIterator,
        I::Item: Borrow<Node>,
    {
        let mut lines = Vec::new();
        let mut records = 0;
        for node in nodes {
            let node = node.borrow();
            let rendered = self.write_node(node);
            tracing::trace!(id = %node.id, label = %node.label, lines = rendered.len(), "rendered node");
            lines.extend(rendered);
            records += 1;
        }

        let path = self.sink.append(Destination::Nodes, prefix, &lines)?;
        tracing::info!(records, path = %path.display(), "finished writing nodes");
        Ok(WriteSummary {
            records,
            lines: lines.len(),
            path,
        })
    }

    /// Render every edge and append the batch to the edge file.
    ///
    /// The whole batch is rendered before anything is appended, so an
    /// unresolved edge type leaves the file untouched.
    pub fn write_edges<I>(&self, edges: I, prefix: Option<&Path>) -> WriterResult<WriteSummary>
    where
        I: IntoIterator,
        I::Item: Borrow<Edge>,
    {
        let mut lines = Vec::new();
        let mut records = 0;
        for edge in edges {
            let edge = edge.borrow();
            let rendered = self.write_edge(edge).inspect_err(|e| {
                tracing::error!(error = %e, "aborting edge batch");
            })?;
            tracing::trace!(label = %edge.label, lines = rendered.len(), "rendered edge");
            lines.extend(rendered);
            records += 1;
        }

        let path = self.sink.append(Destination::Edges, prefix, &lines)?;
        tracing::info!(records, path = %path.display(), "finished writing edges");
        Ok(WriteSummary {
            records,
            lines: lines.len(),
            path,
        })
    }

    /// Whether a node record's label (namespace stripped) is declared in the
    /// schema.
    pub fn check_node_label(&self, node: &Node) -> bool {
        self.index.has_node_label(node.local_label())
    }

    /// Whether an edge record's label resolves to an edge type.
    pub fn check_edge_label(&self, edge: &Edge) -> bool {
        self.index.edge_type(&edge.label).is_some()
    }
}
