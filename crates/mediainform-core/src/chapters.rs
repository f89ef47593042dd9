//! Chapter reconstruction for Menu tracks.
//!
//! The provider reports chapters in a Menu track's `extra` bag, one entry per
//! chapter: the key encodes the start time (`_HH_MM_SS_fff`) and the value is
//! `language:title`. Only start times are given, so each chapter's end is the
//! next chapter's start, and the last one runs to the end of the file.

use std::collections::BTreeMap;

use crate::timecode;
use crate::types::{Entry, Menu};

/// Why a single chapter marker was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChapterError {
    /// The key starts like a marker but does not encode a time.
    #[error("malformed chapter timestamp: {key}")]
    MalformedTimestamp { key: String },

    /// The value has no `language:title` separator.
    #[error("chapter {key} has no language separator: {value:?}")]
    MissingSeparator { key: String, value: String },
}

/// Whether an extra-bag key is meant to be a chapter marker.
pub fn is_marker_key(key: &str) -> bool {
    key.starts_with('_')
}

/// Parse one marker into an entry whose end is not yet known.
pub fn parse_marker(key: &str, value: &str) -> Result<Entry, ChapterError> {
    let start_time_str =
        timecode::marker_key_to_timecode(key).ok_or_else(|| ChapterError::MalformedTimestamp {
            key: key.to_string(),
        })?;

    let (language, title) = value
        .split_once(':')
        .ok_or_else(|| ChapterError::MissingSeparator {
            key: key.to_string(),
            value: value.to_string(),
        })?;

    Ok(Entry {
        start_time: timecode::decode(&start_time_str),
        start_time_str,
        end_time: 0.0,
        end_time_str: String::new(),
        title: title.to_string(),
        language: language.to_string(),
    })
}

/// Build a [`Menu`] from a Menu track's extra bag.
///
/// Keys that are not markers are ignored. Markers that fail to parse are
/// logged and dropped; the remaining chapters are still returned. Entries
/// sharing a start time keep key order, so all but the last of them end up
/// zero-length. No markers at all gives a menu with no entries.
pub fn reconstruct(extra: &BTreeMap<String, String>, duration: f32, order: u64) -> Menu {
    let mut entries: Vec<Entry> = extra
        .iter()
        .filter(|(key, _)| is_marker_key(key))
        .filter_map(|(key, value)| match parse_marker(key, value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping chapter marker: {}", e);
                None
            }
        })
        .collect();

    // The bag carries no meaningful order; end times depend on this sort.
    entries.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

    let starts: Vec<(f32, String)> = entries
        .iter()
        .skip(1)
        .map(|e| (e.start_time, e.start_time_str.clone()))
        .collect();
    for (entry, (next_start, next_start_str)) in entries.iter_mut().zip(starts) {
        entry.end_time = next_start;
        entry.end_time_str = next_start_str;
    }

    if let Some(last) = entries.last_mut() {
        last.end_time = duration;
        last.end_time_str = timecode::encode(duration);
    }

    tracing::trace!("Reconstructed {} chapters for menu {}", entries.len(), order);

    Menu {
        order,
        entries,
        duration,
    }
}
