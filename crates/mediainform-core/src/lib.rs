//! # mediainform-core
//!
//! Typed media metadata from MediaInfo reports.
//!
//! This crate provides:
//! - A raw report model matching the provider's JSON output
//! - Tolerant coercion of the provider's all-string fields
//! - Per-track-type field mapping into [`General`], [`Video`], [`Audio`] and [`Text`]
//! - Chapter reconstruction for Menu tracks
//! - A [`Provider`] abstraction with a `mediainfo` CLI implementation
//!
//! ## Example
//!
//! ```no_run
//! let info = mediainform_core::inform("/path/to/video.mkv")?;
//! println!("Container: {}", info.general.format);
//! for chapter in info.chapters() {
//!     println!("{} - {} {}", chapter.start_time_str, chapter.end_time_str, chapter.title);
//! }
//! # Ok::<(), mediainform_core::Error>(())
//! ```

pub mod builder;
pub mod chapters;
pub mod classify;
pub mod coerce;
mod error;
pub mod provider;
pub mod raw;
pub mod timecode;
mod types;

// Re-exports
pub use builder::normalize;
pub use chapters::ChapterError;
pub use error::{Error, Result};
pub use provider::{MediaInfoCli, Provider};
pub use raw::{RawReport, RawTrack, RawValue, TrackKind};
pub use types::{Audio, Entry, General, Info, Menu, Text, Video};

use std::path::Path;

/// Inspect a file with the `mediainfo` CLI found on `PATH`.
pub fn inform<P: AsRef<Path>>(path: P) -> Result<Info> {
    inform_with(&MediaInfoCli::new(), path)
}

/// Inspect a file with the given provider.
///
/// Provider failures are returned as-is and nothing is normalized. On
/// success `general.complete_name` holds the absolute path of the file.
pub fn inform_with<P: Provider, Q: AsRef<Path>>(provider: &P, path: Q) -> Result<Info> {
    let path = std::path::absolute(path.as_ref())?;

    if !provider.load() {
        return Err(Error::not_loaded(provider.name()));
    }

    let handle = provider.open_file(&path)?;
    let report = provider.inform(&handle);
    provider.close(handle);

    let mut info = normalize(&report?);
    info.general.complete_name = path.to_string_lossy().into_owned();

    tracing::debug!("Informed {:?} with {}", path, provider.name());
    Ok(info)
}
