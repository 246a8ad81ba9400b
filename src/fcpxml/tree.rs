//! Generic document tree produced by the FCPXML loader.
//!
//! The chapter scan does not care about the FCPXML schema beyond a handful of
//! attribute names, so the document is modeled as a generic tree rather than
//! typed structs per element. Attributes live in their own map per element and
//! are never merged into the child-element namespace.

use std::collections::BTreeMap;

/// A single XML element: its attributes plus its named children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Attribute name to attribute value.
    pub attributes: BTreeMap<String, String>,
    /// Child name to child value. A tag name that repeats under the same
    /// parent collapses into a single `Many` entry, in document order.
    pub children: BTreeMap<String, NodeValue>,
}

/// The value stored under a child name.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// The tag occurred exactly once under this parent.
    One(Element),
    /// The tag occurred more than once; document order preserved.
    Many(Vec<Element>),
    /// Text-only content (an element with no child elements).
    Text(String),
    /// Empty leaf.
    Null,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an attribute value, `None` if absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate over all element-valued children, flattening `Many` sequences.
    /// `Text` and `Null` children are leaves and are skipped.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.values().flat_map(|value| match value {
            NodeValue::One(element) => std::slice::from_ref(element).iter(),
            NodeValue::Many(elements) => elements.iter(),
            NodeValue::Text(_) | NodeValue::Null => [].iter(),
        })
    }

    /// Elements stored under `name`, whether the tag occurred once or many
    /// times. Returns an empty slice for absent or non-element children.
    pub fn elements_named<'a>(&'a self, name: &str) -> &'a [Element] {
        match self.children.get(name) {
            Some(NodeValue::One(element)) => std::slice::from_ref(element),
            Some(NodeValue::Many(elements)) => elements.as_slice(),
            Some(NodeValue::Text(_)) | Some(NodeValue::Null) | None => &[],
        }
    }
}
