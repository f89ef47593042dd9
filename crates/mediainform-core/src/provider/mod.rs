//! The boundary with the media-analysis provider.
//!
//! A provider opens a file, produces a [`RawReport`] for it and closes it
//! again. Normalization never talks to a provider directly; the entry points
//! in the crate root drive the provider and hand the report over.

mod cli;

pub use cli::{CliHandle, MediaInfoCli};

use std::path::Path;

use crate::raw::RawReport;
use crate::Result;

/// A source of raw reports.
pub trait Provider {
    /// Per-file state between `open_file` and `close`.
    type Handle;

    /// Human-readable name identifying this provider.
    fn name(&self) -> &'static str;

    /// Prepare the provider. Returns `false` when it cannot be used.
    fn load(&self) -> bool;

    /// Open a file for inspection.
    fn open_file(&self, path: &Path) -> Result<Self::Handle>;

    /// Produce the raw report for an opened file.
    fn inform(&self, handle: &Self::Handle) -> Result<RawReport>;

    /// Release an opened file.
    fn close(&self, handle: Self::Handle);
}
