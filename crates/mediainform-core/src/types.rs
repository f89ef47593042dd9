//! Typed media information produced by normalization.
//!
//! Numeric, boolean and time fields always hold a value: when the provider
//! omits a field or emits something unparsable the field keeps its zero
//! value (0, `false`, or the Unix epoch).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized information about a media file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Container-level information.
    pub general: General,
    /// Video tracks in provider order.
    pub video_tracks: Vec<Video>,
    /// Audio tracks in provider order.
    pub audio_tracks: Vec<Audio>,
    /// Text (subtitle) tracks in provider order.
    pub text_tracks: Vec<Text>,
    /// Menu (chapter) tracks in provider order.
    pub menu_tracks: Vec<Menu>,
}

/// Container-level information from the General track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct General {
    pub unique_id: String,
    pub audio_count: u64,
    pub video_count: u64,
    pub text_count: u64,
    pub menu_count: u64,
    /// Lower-cased file extension.
    pub file_extension: String,
    /// Container format (e.g. "Matroska", "MPEG-4").
    pub format: String,
    pub format_version: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Duration in seconds.
    pub duration: f32,
    pub overall_bit_rate: f32,
    pub frame_rate: f32,
    pub frame_count: u64,
    pub is_streamable: bool,
    pub encoded_date: DateTime<Utc>,
    pub file_created_date: DateTime<Utc>,
    pub file_modified_date: DateTime<Utc>,
    pub encoded_application: String,
    pub encoded_library: String,
    pub encoded_library_version: String,
    pub title: String,
    /// Absolute path of the file that was inspected.
    pub complete_name: String,
}

/// A video track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub stream_order: u64,
    pub id: u64,
    pub unique_id: String,
    /// Codec format (e.g. "HEVC", "AVC").
    pub format: String,
    pub format_profile: String,
    pub format_level: String,
    pub format_tier: String,
    pub codec_id: String,
    /// Duration in seconds.
    pub duration: f32,
    pub bit_rate: f32,
    pub width: u64,
    pub height: u64,
    pub sampled_width: u64,
    pub sampled_height: u64,
    pub pixel_aspect_ratio: f32,
    pub display_aspect_ratio: f32,
    pub frame_rate_mode: String,
    pub frame_rate: f32,
    pub frame_count: u64,
    pub color_space: String,
    pub chroma_subsampling: String,
    pub bit_depth: u64,
    pub stream_size: u64,
    pub stream_size_proportion: f32,
    pub encoded_library: String,
    pub encoded_library_name: String,
    pub encoded_library_version: String,
    pub encoded_library_settings: String,
    pub default: bool,
    pub forced: bool,
    /// Stereoscopic (multi-view) video.
    pub b3d: bool,
    pub title: String,
}

/// An audio track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    pub stream_order: u64,
    pub id: u64,
    pub unique_id: String,
    pub format: String,
    pub format_commercial: String,
    pub format_additional_features: String,
    pub codec_id: String,
    pub duration: f32,
    pub bit_rate: f32,
    pub channels: u64,
    pub channel_positions: String,
    pub channel_layout: String,
    pub samples_per_frame: u64,
    pub sampling_rate: u64,
    pub sampling_count: u64,
    pub frame_rate: f32,
    pub frame_count: u64,
    pub compression_mode: String,
    pub stream_size: u64,
    pub stream_size_proportion: f32,
    pub language: String,
    pub default: bool,
    pub forced: bool,
    pub title: String,
}

/// A text (subtitle) track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Position among the file's text tracks.
    pub order: u64,
    pub stream_order: u64,
    pub id: u64,
    pub unique_id: String,
    pub format: String,
    pub codec_id: String,
    pub duration: f32,
    pub bit_rate: f32,
    pub frame_count: u64,
    pub element_count: u64,
    pub stream_size: u64,
    pub language: String,
    pub default: bool,
    pub forced: bool,
    pub title: String,
}

/// A menu track, holding the file's chapters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    /// Position among the file's menu tracks.
    pub order: u64,
    /// Chapters sorted by start time, covering the file without gaps.
    pub entries: Vec<Entry>,
    /// Total file duration in seconds; the last chapter ends here.
    pub duration: f32,
}

/// A single chapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub start_time: f32,
    pub start_time_str: String,
    pub end_time: f32,
    pub end_time_str: String,
    pub title: String,
    pub language: String,
}

impl Info {
    /// Returns the primary video track.
    ///
    /// Prefers the first track marked as default; falls back to the first track.
    pub fn primary_video(&self) -> Option<&Video> {
        self.video_tracks
            .iter()
            .find(|t| t.default)
            .or_else(|| self.video_tracks.first())
    }

    /// Returns the primary audio track.
    ///
    /// Prefers the first track marked as default; falls back to the first track.
    pub fn primary_audio(&self) -> Option<&Audio> {
        self.audio_tracks
            .iter()
            .find(|t| t.default)
            .or_else(|| self.audio_tracks.first())
    }

    /// Chapters of the first menu track, if any.
    pub fn chapters(&self) -> &[Entry] {
        self.menu_tracks
            .first()
            .map(|m| m.entries.as_slice())
            .unwrap_or(&[])
    }
}

impl Menu {
    /// The chapter playing at `seconds`.
    ///
    /// Start is inclusive and end exclusive, except that the file's final
    /// instant belongs to the last chapter.
    pub fn entry_at(&self, seconds: f32) -> Option<&Entry> {
        let last = self.entries.last()?;
        if seconds == last.end_time && seconds >= last.start_time {
            return Some(last);
        }
        self.entries
            .iter()
            .find(|e| e.start_time <= seconds && seconds < e.end_time)
    }
}

impl Entry {
    /// Chapter length in seconds.
    pub fn duration(&self) -> f32 {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: f32, end: f32, title: &str) -> Entry {
        Entry {
            start_time: start,
            end_time: end,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn primary_video_prefers_default() {
        let info = Info {
            video_tracks: vec![
                Video {
                    format: "AVC".to_string(),
                    ..Default::default()
                },
                Video {
                    format: "HEVC".to_string(),
                    default: true,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(info.primary_video().unwrap().format, "HEVC");
    }

    #[test]
    fn primary_audio_falls_back_to_first() {
        let info = Info {
            audio_tracks: vec![
                Audio {
                    format: "AAC".to_string(),
                    ..Default::default()
                },
                Audio {
                    format: "AC-3".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(info.primary_audio().unwrap().format, "AAC");
        assert!(Info::default().primary_audio().is_none());
    }

    #[test]
    fn default_general_is_all_zero() {
        let general = General::default();
        assert_eq!(general.duration, 0.0);
        assert!(!general.is_streamable);
        assert_eq!(general.encoded_date, DateTime::<Utc>::UNIX_EPOCH);
        assert!(Info::default().chapters().is_empty());
    }

    #[test]
    fn entry_at_finds_covering_chapter() {
        let menu = Menu {
            order: 0,
            duration: 30.0,
            entries: vec![
                entry(0.0, 10.0, "One"),
                entry(10.0, 25.0, "Two"),
                entry(25.0, 30.0, "Three"),
            ],
        };
        assert_eq!(menu.entry_at(0.0).unwrap().title, "One");
        assert_eq!(menu.entry_at(9.99).unwrap().title, "One");
        assert_eq!(menu.entry_at(10.0).unwrap().title, "Two");
        assert_eq!(menu.entry_at(30.0).unwrap().title, "Three");
        assert!(menu.entry_at(30.5).is_none());
        assert!(Menu::default().entry_at(0.0).is_none());
    }
}
