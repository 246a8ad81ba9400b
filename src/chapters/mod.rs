//! Chapter extraction pipeline.
//!
//! Ties the stages together: load the FCPXML document, scan it for chapter
//! markers, resolve each marker to an absolute timestamp, and return the
//! sorted `HH:MM:SS <name>` lines ready for a video-hosting chapter field.

mod collect;
mod timecode;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

pub use collect::{collect_markers, ChapterMarker};
pub use timecode::{rational_to_seconds, resolve};

use crate::fcpxml::load_document;

/// Extract all valid chapter lines from an FCPXML project file.
///
/// Invalid markers (unparseable time fields, or a marker positioned before
/// its clip's trim-in point) are dropped; everything else becomes one
/// `"HH:MM:SS <name>"` line. Lines are sorted lexicographically, which for
/// the zero-padded timestamp prefix is chronological order.
pub fn extract_chapters(path: &Path) -> Result<Vec<String>> {
    let root = load_document(path)
        .with_context(|| format!("failed to load project file {}", path.display()))?;

    let markers = collect_markers(&root);
    let total = markers.len();

    let mut lines: Vec<String> = markers
        .iter()
        .filter_map(|marker| resolve(marker).map(|timestamp| format!("{} {}", timestamp, marker.name)))
        .collect();
    lines.sort();

    debug!(valid = lines.len(), total, "resolved chapter markers");
    Ok(lines)
}
