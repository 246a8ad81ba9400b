//! fcpx-chapters — extract chapter markers from FCPXML project files.
//!
//! Final Cut Pro attaches chapter markers to clips, and clips sit at an
//! offset within the composed sequence, so a marker's absolute playback time
//! has to be reconstructed from three rational-time attributes. This crate
//! does that reconstruction and emits `HH:MM:SS <name>` lines suitable for a
//! video-hosting chapter field.
//!
//! Pipeline: [`fcpxml`] loads the document into a generic tree, [`chapters`]
//! scans it for markers, resolves each to an absolute timestamp, and returns
//! the sorted chapter lines.

pub mod chapters;
pub mod fcpxml;

pub use chapters::{extract_chapters, ChapterMarker};
pub use fcpxml::XmlError;
