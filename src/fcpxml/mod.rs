//! FCPXML document loading.
//!
//! Final Cut Pro project files are XML; the pieces the chapter scan needs are
//! plain element attributes (`offset`, `start`, `value`). This module parses
//! the document into a schema-agnostic tree so the scan survives new container
//! types and arbitrary clip nesting without code changes.

mod parse;
mod tree;

pub use parse::{load_document, parse_document, XmlError};
pub use tree::{Element, NodeValue};
