//! End-to-end tests of the extraction pipeline through the library API.

use super::helpers::{temp_project, SAMPLE_CHAPTERS, SAMPLE_PROJECT};
use fcpx_chapters::extract_chapters;

#[test]
fn sample_project_produces_expected_chapters() {
    let (dir, path) = temp_project("episode.fcpxml", SAMPLE_PROJECT);

    let lines = extract_chapters(&path).expect("extraction should succeed");
    assert_eq!(lines, SAMPLE_CHAPTERS);

    drop(dir);
}

#[test]
fn lines_are_sorted_even_when_clips_are_out_of_order() {
    // Later clip listed first in the document.
    let xml = r#"<fcpxml>
      <spine>
        <asset-clip offset="600/1s" start="0/1s">
          <chapter-marker start="0/1s" value="Second"/>
        </asset-clip>
        <asset-clip offset="0/1s" start="0/1s">
          <chapter-marker start="30/1s" value="First"/>
        </asset-clip>
      </spine>
    </fcpxml>"#;
    let (dir, path) = temp_project("reordered.fcpxml", xml);

    let lines = extract_chapters(&path).expect("extraction should succeed");
    assert_eq!(lines, vec!["00:00:30 First", "00:10:00 Second"]);

    drop(dir);
}

#[test]
fn bare_second_attributes_are_accepted() {
    // The permissive rational-time form: plain integer seconds.
    let xml = r#"<fcpxml>
      <asset-clip offset="100s" start="0s">
        <chapter-marker start="5s" value="Plain Seconds"/>
      </asset-clip>
    </fcpxml>"#;
    let (dir, path) = temp_project("bare.fcpxml", xml);

    let lines = extract_chapters(&path).expect("extraction should succeed");
    assert_eq!(lines, vec!["00:01:45 Plain Seconds"]);

    drop(dir);
}

#[test]
fn unresolvable_markers_do_not_abort_the_run() {
    let xml = r#"<fcpxml>
      <asset-clip offset="0/1s" start="0/1s">
        <chapter-marker start="not-a-time" value="Broken"/>
        <chapter-marker start="10/1s" value="Fine"/>
      </asset-clip>
    </fcpxml>"#;
    let (dir, path) = temp_project("partial.fcpxml", xml);

    let lines = extract_chapters(&path).expect("extraction should succeed");
    assert_eq!(lines, vec!["00:00:10 Fine"]);

    drop(dir);
}
