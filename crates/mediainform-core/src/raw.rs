//! The provider's raw report, as deserialized from its JSON output.
//!
//! Every field arrives as a string and absent fields are simply missing.
//! The only exceptions are `Encoded_Library`, which some muxers emit as a
//! nested object, and `extra`, a string-to-string bag of auxiliary fields
//! (chapter markers live there for Menu tracks).

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::Result;

/// Top-level report for one file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReport {
    #[serde(default)]
    media: Option<RawMedia>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawMedia {
    #[serde(rename = "@ref", default)]
    file_ref: String,
    #[serde(default)]
    track: Vec<RawTrack>,
}

impl RawReport {
    /// Parse a report from the provider's JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a report from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Build a report directly from a track list.
    pub fn from_tracks(tracks: Vec<RawTrack>) -> Self {
        Self {
            media: Some(RawMedia {
                file_ref: String::new(),
                track: tracks,
            }),
        }
    }

    /// Tracks in the order the provider listed them.
    pub fn tracks(&self) -> &[RawTrack] {
        self.media.as_ref().map(|m| m.track.as_slice()).unwrap_or(&[])
    }

    /// The path the provider reported for the file, if any.
    pub fn file_ref(&self) -> Option<&str> {
        self.media
            .as_ref()
            .map(|m| m.file_ref.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Track type discriminant. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackKind {
    General,
    Video,
    Audio,
    Text,
    Other,
    Image,
    Menu,
    Unknown(String),
}

impl TrackKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "General" => Self::General,
            "Video" => Self::Video,
            "Audio" => Self::Audio,
            "Text" => Self::Text,
            "Other" => Self::Other,
            "Image" => Self::Image,
            "Menu" => Self::Menu,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// A field value: plain text, a nested object, or anything else the
/// provider emitted (numbers, arrays, null). The last kind is never read as
/// text but does not reject the report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Object(serde_json::Map<String, serde_json::Value>),
    Other(serde_json::Value),
}

impl RawValue {
    /// Render the value as text regardless of its shape.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Text(s) => s.clone(),
            RawValue::Object(map) => serde_json::Value::Object(map.clone()).to_string(),
            RawValue::Other(value) => value.to_string(),
        }
    }
}

/// One element of the provider's flat track list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTrack {
    #[serde(rename = "@type")]
    track_type: String,
    #[serde(default)]
    extra: BTreeMap<String, String>,
    #[serde(flatten)]
    fields: BTreeMap<String, RawValue>,
}

impl RawTrack {
    /// Create an empty track of the given type.
    pub fn new(track_type: impl Into<String>) -> Self {
        Self {
            track_type: track_type.into(),
            ..Default::default()
        }
    }

    /// Builder-style setter for a text field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), RawValue::Text(value.into()));
        self
    }

    /// Builder-style setter for an extra-bag entry.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The raw `@type` string.
    pub fn track_type(&self) -> &str {
        &self.track_type
    }

    pub fn kind(&self) -> TrackKind {
        TrackKind::parse(&self.track_type)
    }

    /// Look up a raw field.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name)
    }

    /// Look up a text field. Object-valued fields yield `None`.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(RawValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Text field or an empty string when absent.
    pub fn text_or_default(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }

    /// Text form of a field that may be either a string or an object.
    pub fn textual(&self, name: &str) -> String {
        self.fields.get(name).map(RawValue::to_text).unwrap_or_default()
    }

    /// Provider-specific auxiliary fields.
    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "creatingLibrary": {"name": "MediaLib", "version": "21.09"},
        "media": {
            "@ref": "/movies/sample.mkv",
            "track": [
                {"@type": "General", "Format": "Matroska", "Duration": "10.000"},
                {"@type": "Video", "@typeorder": "1", "Format": "AVC",
                 "Encoded_Library": {"Name": "x264", "Version": "core 164"}},
                {"@type": "Menu", "extra": {"_00_00_00_000": "en:Intro"}}
            ]
        }
    }"#;

    #[test]
    fn test_parse_report() {
        let report = RawReport::from_json(SAMPLE).unwrap();
        assert_eq!(report.file_ref(), Some("/movies/sample.mkv"));
        assert_eq!(report.tracks().len(), 3);

        let kinds: Vec<TrackKind> = report.tracks().iter().map(RawTrack::kind).collect();
        assert_eq!(
            kinds,
            vec![TrackKind::General, TrackKind::Video, TrackKind::Menu]
        );
    }

    #[test]
    fn test_text_and_object_fields() {
        let report = RawReport::from_json(SAMPLE).unwrap();
        let video = &report.tracks()[1];

        assert_eq!(video.text("Format"), Some("AVC"));
        assert_eq!(video.text("@typeorder"), Some("1"));
        assert_eq!(video.text("Encoded_Library"), None);
        assert!(matches!(
            video.get("Encoded_Library"),
            Some(RawValue::Object(_))
        ));
        assert_eq!(
            video.textual("Encoded_Library"),
            r#"{"Name":"x264","Version":"core 164"}"#
        );
        assert_eq!(video.textual("Missing"), "");
    }

    #[test]
    fn test_extra_is_separate_from_fields() {
        let report = RawReport::from_json(SAMPLE).unwrap();
        let menu = &report.tracks()[2];
        assert_eq!(menu.extra().get("_00_00_00_000").map(String::as_str), Some("en:Intro"));
        assert!(menu.get("extra").is_none());
    }

    #[test]
    fn test_unexpected_field_types_do_not_reject_report() {
        let report = RawReport::from_json(
            r#"{"media": {"track": [{"@type": "General", "Format": "Matroska",
                "Count": 12, "Tags": ["a", "b"], "Nothing": null}]}}"#,
        )
        .unwrap();
        let general = &report.tracks()[0];

        assert_eq!(general.text("Format"), Some("Matroska"));
        assert_eq!(general.text("Count"), None);
        assert_eq!(general.text("Nothing"), None);
        assert_eq!(general.text_or_default("Tags"), "");
        assert!(matches!(general.get("Count"), Some(RawValue::Other(_))));
        assert_eq!(general.textual("Count"), "12");
        assert_eq!(general.textual("Tags"), r#"["a","b"]"#);
        assert_eq!(general.textual("Nothing"), "null");
    }

    #[test]
    fn test_empty_and_missing_media() {
        assert!(RawReport::from_json("{}").unwrap().tracks().is_empty());
        assert!(RawReport::from_json(r#"{"media": {"@ref": "x"}}"#)
            .unwrap()
            .tracks()
            .is_empty());
        assert!(RawReport::from_json(r#"{"media": null}"#)
            .unwrap()
            .tracks()
            .is_empty());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(RawReport::from_json(r#"{"media": {"track": "nope"}}"#).is_err());
        assert!(RawReport::from_json("not json").is_err());
    }

    #[test]
    fn test_track_kind_is_case_sensitive() {
        assert_eq!(TrackKind::parse("Menu"), TrackKind::Menu);
        assert_eq!(TrackKind::parse("menu"), TrackKind::Unknown("menu".into()));
    }
}
