//! Chapter marker collection from the document tree.
//!
//! Markers can sit on clips at any depth: clips nest inside other clips,
//! spines, and storyline containers. Rather than hard-coding every container
//! path FCPXML allows, the scan walks the whole tree and picks up every
//! `chapter-marker` element it passes, remembering the timing attributes of
//! the element that carries it.

use tracing::debug;

use crate::fcpxml::Element;

/// One chapter marker together with its enclosing clip's timing attributes.
///
/// Fields hold the raw attribute strings; rational-time conversion happens
/// during resolution. A missing attribute is recorded as an empty string,
/// which converts to zero seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterMarker {
    /// Display text for the chapter, may be empty.
    pub name: String,
    /// Marker position within the clip's local timeline.
    pub start: String,
    /// Point in the source asset where the clip begins (trim-in).
    pub asset_start: String,
    /// Point in the composed sequence where the clip is placed.
    pub asset_offset: String,
}

/// Tag name of the marker element in FCPXML.
const MARKER_TAG: &str = "chapter-marker";

/// Collect every chapter marker reachable from `root`, in document order.
pub fn collect_markers(root: &Element) -> Vec<ChapterMarker> {
    let mut markers = Vec::new();
    walk(root, &mut markers);
    debug!(count = markers.len(), "collected chapter markers");
    markers
}

fn walk(element: &Element, markers: &mut Vec<ChapterMarker>) {
    // A single marker parses as one element, several as a sequence; the
    // source format does not distinguish the two syntactically.
    for marker in element.elements_named(MARKER_TAG) {
        markers.push(ChapterMarker {
            name: marker_name(marker),
            start: attr_or_empty(marker, "start"),
            asset_start: attr_or_empty(element, "start"),
            asset_offset: attr_or_empty(element, "offset"),
        });
    }

    // Recursing into the marker elements themselves is harmless: markers
    // carry no nested markers.
    for child in element.child_elements() {
        walk(child, markers);
    }
}

/// The marker's display text. FCPXML stores it in the `value` attribute;
/// `name` is accepted as a fallback for dialect variants.
fn marker_name(marker: &Element) -> String {
    marker
        .attr("value")
        .or_else(|| marker.attr("name"))
        .unwrap_or_default()
        .to_string()
}

fn attr_or_empty(element: &Element, name: &str) -> String {
    element.attr(name).unwrap_or_default().to_string()
}
