//! Assembles the [`Info`] aggregate from a raw report.

use crate::chapters;
use crate::classify;
use crate::coerce::to_uint;
use crate::raw::{RawReport, RawTrack, TrackKind};
use crate::types::Info;

/// Normalize a raw report into typed media information.
///
/// Never fails: unknown track types are ignored and unparsable fields keep
/// their zero value. If several General tracks are present the last one wins.
/// Menus are reconstructed once every track has been seen, so their final
/// chapter always ends at the General duration.
pub fn normalize(report: &RawReport) -> Info {
    let mut info = Info::default();
    let mut menus: Vec<&RawTrack> = Vec::new();
    let mut general_seen = 0usize;

    for track in report.tracks() {
        tracing::trace!("Classifying {} track", track.track_type());
        match track.kind() {
            TrackKind::General => {
                general_seen += 1;
                info.general = classify::general(track);
            }
            TrackKind::Video => info.video_tracks.push(classify::video(track)),
            TrackKind::Audio => info.audio_tracks.push(classify::audio(track)),
            TrackKind::Text => info.text_tracks.push(classify::text(track)),
            TrackKind::Menu => menus.push(track),
            TrackKind::Other | TrackKind::Image | TrackKind::Unknown(_) => {}
        }
    }

    if general_seen > 1 {
        tracing::warn!(
            "Report has {} General tracks, keeping the last one",
            general_seen
        );
    }

    let duration = info.general.duration;
    info.menu_tracks = menus
        .into_iter()
        .map(|track| {
            let order = track.text("@typeorder").map(to_uint).unwrap_or(0);
            chapters::reconstruct(track.extra(), duration, order)
        })
        .collect();

    tracing::debug!(
        "Normalized report: {} video, {} audio, {} text, {} menu tracks",
        info.video_tracks.len(),
        info.audio_tracks.len(),
        info.text_tracks.len(),
        info.menu_tracks.len()
    );

    info
}
