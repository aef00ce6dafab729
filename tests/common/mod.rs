//! Common test utilities for factgraph integration tests
//!
//! Provides a small biomedical schema, record fixtures and helpers for
//! reading back written fact files.

pub mod fixtures;

pub use fixtures::{
    fact_files, gene_node, hpa_edge, read_batches, sample_mapping, writer_in, SCHEMA_YAML,
};
