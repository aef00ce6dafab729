//! Fact writing: sanitization, property encoding, record rendering, output
//!
//! Output is line-oriented: one `head(args).` fact per line, each batch
//! followed by a blank line. Node and edge facts go to separate files
//! (`nodes.<ext>`, `edges.<ext>`) under an output root and optional path
//! prefix.

mod config;
mod encode;
mod error;
mod facts;
mod sanitize;
mod sink;

pub use config::{WriterConfig, DEFAULT_EXTENSION};
pub use encode::{encode, encode_excluding, render_scalar};
pub use error::{ConfigError, ConfigResult, WriterError, WriterResult};
pub use facts::{FactWriter, WriteSummary};
pub use sanitize::sanitize;
pub use sink::{Destination, OutputSink};
