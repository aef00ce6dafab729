//! Graph records consumed by the fact writer

mod edge;
mod node;

pub use edge::Edge;
pub use node::{Node, Properties, PropertyValue};
