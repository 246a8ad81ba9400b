//! Rational-time arithmetic and timestamp formatting.
//!
//! FCPXML encodes times as exact fractions of seconds, e.g. `"7500/7500s"`
//! or a bare `"100s"`, to avoid floating-point drift across odd frame rates.
//! A marker's absolute position on the composed timeline is
//!
//! ```text
//! marker start - clip trim-in + clip offset in the sequence
//! ```
//!
//! floored to whole seconds, since chapter lists have one-second resolution.

use tracing::warn;

use super::collect::ChapterMarker;

/// Convert a rational-time string to seconds.
///
/// Accepts `"<num>/<den>s"`, `"<int>s"`, and the bare forms without the `s`
/// suffix. An empty string converts to `0.0`. Integer parse failures yield
/// `NAN` rather than a silent zero so the caller can drop the record.
pub fn rational_to_seconds(raw: &str) -> f64 {
    let trimmed = raw.strip_suffix('s').unwrap_or(raw);
    let parts: Vec<&str> = trimmed.split('/').collect();

    match parts.as_slice() {
        [numerator, denominator] => {
            match (numerator.parse::<i64>(), denominator.parse::<i64>()) {
                (Ok(num), Ok(den)) => num as f64 / den as f64,
                _ => f64::NAN,
            }
        }
        [""] => 0.0,
        [seconds] => seconds.parse::<i64>().map_or(f64::NAN, |s| s as f64),
        _ => 0.0,
    }
}

/// Resolve a collected marker to its absolute `HH:MM:SS` timestamp.
///
/// Returns `None` when the marker cannot produce a sensible timestamp: a
/// field that failed to parse, or a marker positioned before its clip's
/// trim-in point.
pub fn resolve(marker: &ChapterMarker) -> Option<String> {
    let start = rational_to_seconds(&marker.start);
    let asset_start = rational_to_seconds(&marker.asset_start);
    let asset_offset = rational_to_seconds(&marker.asset_offset);

    if start.is_nan() || asset_start.is_nan() || asset_offset.is_nan() {
        warn!(name = %marker.name, "dropping marker with unparseable time fields");
        return None;
    }

    if start < asset_start {
        warn!(name = %marker.name, "dropping marker positioned before its clip's trim-in point");
        return None;
    }

    let total = (start - asset_start + asset_offset).floor();
    if !total.is_finite() || total < 0.0 {
        warn!(name = %marker.name, "dropping marker with out-of-range timestamp");
        return None;
    }

    Some(format_timestamp(total as u64))
}

/// Format whole seconds as `HH:MM:SS`. Hours are zero-padded to two digits
/// but never truncated, so very long timelines stay representable.
fn format_timestamp(total_seconds: u64) -> String {
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
