//! FCPXML loading: file on disk -> generic [`Element`] tree.
//!
//! roxmltree keeps attributes and child elements apart by construction, which
//! the conversion preserves: attributes land in `Element::attributes`, nested
//! elements in `Element::children`. A tag name that repeats under one parent
//! becomes a `Many` sequence so the scan can tell one marker from several.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use super::tree::{Element, NodeValue};

/// Errors raised while loading an FCPXML document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed XML: {0}")]
    Parse(#[from] roxmltree::Error),
}

/// Read a file and parse it into the generic tree.
pub fn load_document(path: &Path) -> Result<Element, XmlError> {
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read project file");
    parse_document(&content)
}

/// Parse an FCPXML string into the generic tree, rooted at the document's
/// root element.
pub fn parse_document(xml: &str) -> Result<Element, XmlError> {
    let doc = roxmltree::Document::parse(xml)?;
    Ok(build_element(doc.root_element()))
}

/// Convert one roxmltree element into an [`Element`], recursively.
fn build_element(node: roxmltree::Node) -> Element {
    let mut element = Element::new();

    for attribute in node.attributes() {
        element
            .attributes
            .insert(attribute.name().to_string(), attribute.value().to_string());
    }

    // Group child elements by tag name, preserving document order per name.
    let mut grouped: BTreeMap<String, Vec<roxmltree::Node>> = BTreeMap::new();
    for child in node.children().filter(|n| n.is_element()) {
        grouped
            .entry(child.tag_name().name().to_string())
            .or_default()
            .push(child);
    }

    for (name, nodes) in grouped {
        let value = match nodes.as_slice() {
            [single] => build_node(*single),
            many => NodeValue::Many(many.iter().map(|n| build_element(*n)).collect()),
        };
        element.children.insert(name, value);
    }

    element
}

/// Convert a child node to its stored value. Elements that carry nothing but
/// text become `Text` leaves; fully empty elements become `Null`.
fn build_node(node: roxmltree::Node) -> NodeValue {
    let has_attributes = node.attributes().next().is_some();
    let has_element_children = node.children().any(|n| n.is_element());

    if has_attributes || has_element_children {
        return NodeValue::One(build_element(node));
    }

    match node.text().map(str::trim) {
        Some(text) if !text.is_empty() => NodeValue::Text(text.to_string()),
        _ => NodeValue::Null,
    }
}
