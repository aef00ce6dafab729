//! factgraph: Schema-Driven Graph to Fact Serializer
//!
//! Turns property-graph records (nodes and edges with arbitrary property
//! maps) into logic facts, one `head(args).` statement per line.
//!
//! # Core Concepts
//!
//! - **Schema mapping**: declares which logical types are nodes and which are
//!   edges, and the endpoint types of every edge
//! - **Schema index**: the edge-type lookup built once from the mapping
//! - **Fact writer**: renders records against the index and appends them to
//!   per-kind fact files
//!
//! # Example
//!
//! ```
//! use factgraph::{Edge, FactWriter, SchemaEntry, SchemaIndex, SchemaMapping, WriterConfig};
//!
//! let mapping = SchemaMapping::new().with_entry(
//!     "expressed_in",
//!     SchemaEntry::edge("expressed_in", "gene", "cell_type"),
//! );
//! let dir = std::env::temp_dir().join("factgraph-doc");
//! let writer = FactWriter::new(SchemaIndex::build(&mapping), WriterConfig::new(&dir)).unwrap();
//!
//! let edge = Edge::new("BRCA1", "CL:0000066", "expressed_in");
//! assert_eq!(
//!     writer.write_edge(&edge).unwrap(),
//!     vec!["expressed_in(gene(brca1), cell_type(cl_0000066))."]
//! );
//! ```

mod graph;
pub mod schema;
pub mod writer;

pub use graph::{Edge, Node, Properties, PropertyValue};
pub use schema::{EdgeTypeInfo, Label, SchemaEntry, SchemaError, SchemaIndex, SchemaMapping};
pub use writer::{
    sanitize, ConfigError, Destination, FactWriter, OutputSink, WriteSummary, WriterConfig,
    WriterError, WriterResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
