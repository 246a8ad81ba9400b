//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A small but structurally realistic FCPXML project: two clips on a spine,
/// one carrying two chapter markers and a nested clip with a third, plus one
/// marker that cannot be resolved.
pub const SAMPLE_PROJECT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE fcpxml>
<fcpxml version="1.10">
  <resources>
    <format id="r1" frameDuration="100/2500s"/>
  </resources>
  <library>
    <event name="Uploads">
      <project name="Episode 12">
        <sequence format="r1">
          <spine>
            <asset-clip name="intro" offset="0/2500s" start="0/2500s" format="r1">
              <chapter-marker start="0/2500s" value="Intro"/>
              <chapter-marker start="225000/2500s" value="Overview"/>
              <clip name="overlay" offset="750000/2500s" start="0/2500s">
                <chapter-marker start="25000/2500s" value="Deep Dive"/>
              </clip>
            </asset-clip>
            <ref-clip name="outro" offset="9000000/2500s" start="2500/2500s">
              <chapter-marker start="5000/2500s" value="Wrap Up"/>
              <chapter-marker start="0/2500s" value="Before Trim"/>
            </ref-clip>
          </spine>
        </sequence>
      </project>
    </event>
  </library>
</fcpxml>
"#;

/// Chapter lines expected from [`SAMPLE_PROJECT`], in output order.
///
/// Intro: 0s. Overview: 90s. Deep Dive: 10s into a clip placed at 300s.
/// Wrap Up: 2s past the trim-in of a clip placed at 3600s. "Before Trim"
/// starts before its clip's trim-in point and is dropped.
pub const SAMPLE_CHAPTERS: &[&str] = &[
    "00:00:00 Intro",
    "00:01:30 Overview",
    "00:05:10 Deep Dive",
    "01:00:01 Wrap Up",
];

/// Write `content` to `name` inside a fresh temp directory.
///
/// Returns the directory guard alongside the path; dropping the guard
/// removes the file.
pub fn temp_project(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    (dir, path)
}
