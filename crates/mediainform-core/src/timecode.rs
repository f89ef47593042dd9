//! Conversion between seconds and `HH:MM:SS.mmm` strings.

use crate::coerce::to_uint;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Format a duration in seconds as `HH:MM:SS.mmm`.
///
/// The value is truncated to whole milliseconds before it is split into
/// hours, minutes and seconds, so the decomposition works on integers only.
/// Negative and NaN inputs format as zero. Hours are not wrapped at 24.
pub fn encode(seconds: f32) -> String {
    let millis = ((seconds * 1000.0) as i64).max(0);

    let hours = millis / MS_PER_HOUR;
    let minutes = (millis % MS_PER_HOUR) / MS_PER_MINUTE;
    let secs = (millis % MS_PER_MINUTE) / MS_PER_SECOND;
    let ms = millis % MS_PER_SECOND;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
}

/// Parse `HH:MM:SS.mmm` back into seconds.
///
/// Total: a missing or malformed component counts as zero.
pub fn decode(s: &str) -> f32 {
    let (hms, frac) = s.split_once('.').unwrap_or((s, ""));
    let mut parts = hms.split(':').map(to_uint);

    let hours = parts.next().unwrap_or(0);
    let minutes = parts.next().unwrap_or(0);
    let secs = parts.next().unwrap_or(0);
    let ms = to_uint(frac);

    let whole = hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(secs);
    whole as f32 + ms as f32 / 1000.0
}

/// Convert a chapter marker key such as `_00_14_14_895` into `00:14:14.895`.
///
/// Returns `None` unless the key is an underscore followed by exactly four
/// underscore-separated runs of digits: up to 3 for hours, up to 2 for
/// minutes and seconds, up to 3 for milliseconds.
pub fn marker_key_to_timecode(key: &str) -> Option<String> {
    let body = key.strip_prefix('_')?;
    let segments: Vec<&str> = body.split('_').collect();

    let [hh, mm, ss, fff] = segments.as_slice() else {
        return None;
    };
    let digits = |s: &str, max: usize| {
        !s.is_empty() && s.len() <= max && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !(digits(*hh, 3) && digits(*mm, 2) && digits(*ss, 2) && digits(*fff, 3)) {
        return None;
    }

    Some(format!("{hh}:{mm}:{ss}.{fff}"))
}
