//! Schema mapping input and the edge-type lookup built from it
//!
//! The mapping is produced elsewhere (a schema-resolution step) and only
//! read here. [`SchemaIndex::build`] runs once per writer and the result is
//! never mutated afterwards.

mod index;
mod mapping;

pub use index::{EdgeTypeInfo, SchemaIndex};
pub use mapping::{Label, Representation, SchemaEntry, SchemaError, SchemaMapping, SchemaResult};
