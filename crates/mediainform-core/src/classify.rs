//! Field mapping from raw tracks into typed records.
//!
//! Field names are the ones the provider uses in its JSON output.

use crate::coerce::{to_bool, to_f32, to_time, to_uint};
use crate::raw::RawTrack;
use crate::types::{Audio, General, Text, Video};

/// Small accessor layer so each mapping reads as one line per field.
struct Fields<'a>(&'a RawTrack);

impl Fields<'_> {
    fn string(&self, name: &str) -> String {
        self.0.text_or_default(name)
    }

    fn uint(&self, name: &str) -> u64 {
        self.0.text(name).map(to_uint).unwrap_or(0)
    }

    fn float(&self, name: &str) -> f32 {
        self.0.text(name).map(to_f32).unwrap_or(0.0)
    }

    fn flag(&self, name: &str) -> bool {
        self.0.text(name).is_some_and(to_bool)
    }

    fn time(&self, name: &str) -> chrono::DateTime<chrono::Utc> {
        self.0.text(name).map(to_time).unwrap_or_default()
    }

    fn present(&self, name: &str) -> bool {
        self.0.text(name).is_some_and(|s| !s.is_empty())
    }
}

/// Map a General track.
///
/// `complete_name` is left empty; the caller fills it from the resolved path.
pub fn general(track: &RawTrack) -> General {
    let f = Fields(track);
    General {
        unique_id: f.string("UniqueID"),
        audio_count: f.uint("AudioCount"),
        video_count: f.uint("VideoCount"),
        text_count: f.uint("TextCount"),
        menu_count: f.uint("MenuCount"),
        file_extension: f.string("FileExtension").to_lowercase(),
        format: f.string("Format"),
        format_version: f.string("Format_Version"),
        file_size: f.uint("FileSize"),
        duration: f.float("Duration"),
        overall_bit_rate: f.float("OverallBitRate"),
        frame_rate: f.float("FrameRate"),
        frame_count: f.uint("FrameCount"),
        is_streamable: f.flag("IsStreamable"),
        encoded_date: f.time("Encoded_Date"),
        file_created_date: f.time("File_Created_Date"),
        file_modified_date: f.time("File_Modified_Date"),
        encoded_application: f.string("Encoded_Application"),
        encoded_library: track.textual("Encoded_Library"),
        encoded_library_version: f.string("Encoded_Library_Version"),
        title: f.string("Title"),
        complete_name: String::new(),
    }
}

/// Map a Video track.
pub fn video(track: &RawTrack) -> Video {
    let f = Fields(track);
    Video {
        stream_order: f.uint("StreamOrder"),
        id: f.uint("ID"),
        unique_id: f.string("UniqueID"),
        format: f.string("Format"),
        format_profile: f.string("Format_Profile"),
        format_level: f.string("Format_Level"),
        format_tier: f.string("Format_Tier"),
        codec_id: f.string("CodecID"),
        duration: f.float("Duration"),
        bit_rate: f.float("BitRate"),
        width: f.uint("Width"),
        height: f.uint("Height"),
        sampled_width: f.uint("Sampled_Width"),
        sampled_height: f.uint("Sampled_Height"),
        pixel_aspect_ratio: f.float("PixelAspectRatio"),
        display_aspect_ratio: f.float("DisplayAspectRatio"),
        frame_rate_mode: f.string("FrameRate_Mode"),
        frame_rate: f.float("FrameRate"),
        frame_count: f.uint("FrameCount"),
        color_space: f.string("ColorSpace"),
        chroma_subsampling: f.string("ChromaSubsampling"),
        bit_depth: f.uint("BitDepth"),
        stream_size: f.uint("StreamSize"),
        stream_size_proportion: f.float("StreamSize_Proportion"),
        encoded_library: track.textual("Encoded_Library"),
        encoded_library_name: f.string("Encoded_Library_Name"),
        encoded_library_version: f.string("Encoded_Library_Version"),
        encoded_library_settings: f.string("Encoded_Library_Settings"),
        default: f.flag("Default"),
        forced: f.flag("Forced"),
        b3d: f.present("Multi_View_Count"),
        title: f.string("Title"),
    }
}

/// Map an Audio track.
pub fn audio(track: &RawTrack) -> Audio {
    let f = Fields(track);
    Audio {
        stream_order: f.uint("StreamOrder"),
        id: f.uint("ID"),
        unique_id: f.string("UniqueID"),
        format: f.string("Format"),
        format_commercial: f.string("Format_Commercial_IfAny"),
        format_additional_features: f.string("Format_AdditionalFeatures"),
        codec_id: f.string("CodecID"),
        duration: f.float("Duration"),
        bit_rate: f.float("BitRate"),
        channels: f.uint("Channels"),
        channel_positions: f.string("ChannelPositions"),
        channel_layout: f.string("ChannelLayout"),
        samples_per_frame: f.uint("SamplesPerFrame"),
        sampling_rate: f.uint("SamplingRate"),
        sampling_count: f.uint("SamplingCount"),
        frame_rate: f.float("FrameRate"),
        frame_count: f.uint("FrameCount"),
        compression_mode: f.string("Compression_Mode"),
        stream_size: f.uint("StreamSize"),
        stream_size_proportion: f.float("StreamSize_Proportion"),
        language: f.string("Language"),
        default: f.flag("Default"),
        forced: f.flag("Forced"),
        title: f.string("Title"),
    }
}

/// Map a Text track.
pub fn text(track: &RawTrack) -> Text {
    let f = Fields(track);
    Text {
        order: f.uint("@typeorder"),
        stream_order: f.uint("StreamOrder"),
        id: f.uint("ID"),
        unique_id: f.string("UniqueID"),
        format: f.string("Format"),
        codec_id: f.string("CodecID"),
        duration: f.float("Duration"),
        bit_rate: f.float("BitRate"),
        frame_count: f.uint("FrameCount"),
        element_count: f.uint("ElementCount"),
        stream_size: f.uint("StreamSize"),
        language: f.string("Language"),
        default: f.flag("Default"),
        forced: f.flag("Forced"),
        title: f.string("Title"),
    }
}
