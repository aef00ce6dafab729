//! Schema and record fixtures shared by the integration tests

use factgraph::{Edge, FactWriter, Node, SchemaIndex, SchemaMapping, WriterConfig};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A schema in the shape the upstream schema-resolution step produces
pub const SCHEMA_YAML: &str = r#"
Title: test schema

gene:
  represented_as: node
  input_label: gene
  is_a: biological entity

cell type:
  represented_as: node
  input_label: cell type

transcript:
  represented_as: node
  input_label: [transcript, rna transcript]

expressed in:
  represented_as: edge
  input_label: expressed_in
  source: gene
  target: cell type

transcribed to:
  represented_as: edge
  input_label: [transcribed_to, transcribes]
  source: [gene, pseudogene]
  target: [transcript]

gene to gene coexpression:
  represented_as: edge
  input_label: coexpressed_with
  source: gene
  target: gene
  output_label: Coexpressed With

interacts with:
  represented_as: edge
  input_label: interacts_with
  source: protein
"#;

pub fn sample_mapping() -> SchemaMapping {
    SchemaMapping::from_yaml_str(SCHEMA_YAML).expect("fixture schema parses")
}

/// Writer over the fixture schema with output rooted at `dir`
pub fn writer_in(dir: &Path, config: WriterConfig) -> FactWriter {
    let index = SchemaIndex::build(&sample_mapping());
    FactWriter::new(index, config.with_output_dir(dir)).expect("writer opens output dir")
}

pub fn gene_node(id: &str) -> Node {
    Node::new(id, "bio.Gene")
        .with_property("gene_name", id)
        .with_property("source", "HPA")
}

/// An HPA-style expression edge
pub fn hpa_edge(gene: &str, cell: &str, score: f64) -> Edge {
    Edge::new(gene, cell, "expressed_in").with_property("confidence_score", score)
}

/// Split a fact file into its blank-line separated batches
pub fn read_batches(path: &Path) -> Vec<Vec<String>> {
    let content = std::fs::read_to_string(path).expect("fact file readable");
    content
        .split("\n\n")
        .filter(|batch| !batch.is_empty())
        .map(|batch| batch.lines().map(str::to_string).collect())
        .collect()
}

/// All fact files under `root`, sorted
pub fn fact_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().map(|x| x == extension).unwrap_or(false))
        .collect();
    files.sort();
    files
}
