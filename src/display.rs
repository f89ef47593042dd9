//! Human-readable rendering of [`Info`].

use crate::inform::{Entry, Info};
use std::fmt::Write;

/// Render the full report.
pub fn render_info(info: &Info) -> String {
    let mut out = String::new();
    let g = &info.general;

    let _ = writeln!(out, "File: {}", g.complete_name);
    let _ = writeln!(out, "Format: {} {}", g.format, g.format_version);
    let _ = writeln!(out, "Size: {} bytes", g.file_size);
    let _ = writeln!(
        out,
        "Duration: {}",
        mediainform_core::timecode::encode(g.duration)
    );
    if !g.title.is_empty() {
        let _ = writeln!(out, "Title: {}", g.title);
    }
    if !g.encoded_application.is_empty() {
        let _ = writeln!(out, "Muxed by: {}", g.encoded_application);
    }

    let _ = writeln!(out, "\nVideo Tracks: {}", info.video_tracks.len());
    for (i, v) in info.video_tracks.iter().enumerate() {
        let _ = write!(out, "  [{}] {} {}x{}", i, v.format, v.width, v.height);
        if v.frame_rate > 0.0 {
            let _ = write!(out, " {:.3} fps", v.frame_rate);
        }
        if v.bit_depth > 0 {
            let _ = write!(out, ", {} bit", v.bit_depth);
        }
        if v.b3d {
            let _ = write!(out, ", 3D");
        }
        let _ = writeln!(out, "{}", flags(v.default, v.forced));
    }

    let _ = writeln!(out, "\nAudio Tracks: {}", info.audio_tracks.len());
    for (i, a) in info.audio_tracks.iter().enumerate() {
        let _ = write!(out, "  [{}] {} {}ch", i, a.format, a.channels);
        if a.sampling_rate > 0 {
            let _ = write!(out, " {} Hz", a.sampling_rate);
        }
        if !a.language.is_empty() {
            let _ = write!(out, " ({})", a.language);
        }
        let _ = writeln!(out, "{}", flags(a.default, a.forced));
    }

    let _ = writeln!(out, "\nText Tracks: {}", info.text_tracks.len());
    for (i, t) in info.text_tracks.iter().enumerate() {
        let _ = write!(out, "  [{}] {}", i, t.format);
        if !t.language.is_empty() {
            let _ = write!(out, " ({})", t.language);
        }
        let _ = writeln!(out, "{}", flags(t.default, t.forced));
    }

    if !info.chapters().is_empty() {
        let _ = writeln!(out, "\nChapters: {}", info.chapters().len());
        out.push_str(&render_chapters(info.chapters()));
    }

    out
}

/// Render a chapter list, one line per chapter.
pub fn render_chapters(entries: &[Entry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = write!(out, "  {} - {}  {}", e.start_time_str, e.end_time_str, e.title);
        if !e.language.is_empty() {
            let _ = write!(out, " [{}]", e.language);
        }
        out.push('\n');
    }
    out
}

fn flags(default: bool, forced: bool) -> &'static str {
    match (default, forced) {
        (true, true) => " [default, forced]",
        (true, false) => " [default]",
        (false, true) => " [forced]",
        (false, false) => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inform::{Audio, Menu, Video};

    fn sample() -> Info {
        let mut info = Info::default();
        info.general.complete_name = "/movies/sample.mkv".to_string();
        info.general.format = "Matroska".to_string();
        info.general.duration = 123.6;
        info.video_tracks.push(Video {
            format: "HEVC".to_string(),
            width: 1920,
            height: 1080,
            bit_depth: 10,
            default: true,
            ..Default::default()
        });
        info.audio_tracks.push(Audio {
            format: "AAC".to_string(),
            channels: 6,
            language: "en".to_string(),
            ..Default::default()
        });
        info.menu_tracks.push(Menu {
            order: 0,
            duration: 123.6,
            entries: vec![Entry {
                start_time: 0.0,
                start_time_str: "00:00:00.000".to_string(),
                end_time: 123.6,
                end_time_str: "00:02:03.600".to_string(),
                title: "Opening".to_string(),
                language: "en".to_string(),
            }],
        });
        info
    }

    #[test]
    fn test_render_info() {
        let text = render_info(&sample());
        assert!(text.contains("File: /movies/sample.mkv"));
        assert!(text.contains("Duration: 00:02:03.600"));
        assert!(text.contains("[0] HEVC 1920x1080, 10 bit [default]"));
        assert!(text.contains("[0] AAC 6ch (en)"));
        assert!(text.contains("Chapters: 1"));
    }

    #[test]
    fn test_render_chapters() {
        let text = render_chapters(sample().chapters());
        assert_eq!(text, "  00:00:00.000 - 00:02:03.600  Opening [en]\n");
    }

    #[test]
    fn test_render_without_chapters() {
        let text = render_info(&Info::default());
        assert!(!text.contains("Chapters"));
        assert!(text.contains("Video Tracks: 0"));
    }
}
