// Re-export the normalized model from mediainform-core
pub use mediainform_core::{
    Audio, Entry, General, Info, MediaInfoCli, Menu, Provider, Text, Video,
};

use crate::config::ToolsConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Build the provider described by the tools configuration
pub fn provider(tools: &ToolsConfig) -> MediaInfoCli {
    match tools.mediainfo_path {
        Some(ref path) => MediaInfoCli::with_binary(path),
        None => MediaInfoCli::new(),
    }
}

/// Inspect a media file using the configured mediainfo
pub fn inform_file(path: &Path, tools: &ToolsConfig) -> Result<Info> {
    mediainform_core::inform_with(&provider(tools), path)
        .with_context(|| format!("Failed to inspect {:?}", path))
}
