//! Provider backed by the `mediainfo` command-line tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::Provider;
use crate::raw::RawReport;
use crate::{Error, Result};

const TOOL: &str = "mediainfo";

/// Runs `mediainfo --Output=JSON` and parses its output.
#[derive(Debug, Clone, Default)]
pub struct MediaInfoCli {
    binary: Option<PathBuf>,
}

/// A file the CLI provider has accepted for inspection.
#[derive(Debug)]
pub struct CliHandle {
    binary: PathBuf,
    path: PathBuf,
}

impl MediaInfoCli {
    /// Use `mediainfo` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific binary, falling back to `PATH` when it does not exist.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(binary.into()),
        }
    }

    /// Resolve the executable to run, preferring the configured path.
    pub fn resolve(&self) -> Result<PathBuf> {
        if let Some(path) = &self.binary {
            if path.exists() {
                return Ok(path.clone());
            }
            tracing::debug!("Configured {} not found at {:?}", TOOL, path);
        }

        which::which(TOOL).map_err(|_| Error::tool_not_found(TOOL))
    }

    /// Last non-empty line of `mediainfo --Version` (the library version).
    pub fn version(&self) -> Result<String> {
        let binary = self.resolve()?;
        let output = Command::new(&binary).arg("--Version").output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tool_failed(TOOL, stderr.to_string()));
        }

        // Output looks like "MediaInfo Command line,\nMediaInfoLib - v21.09"
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}

impl Provider for MediaInfoCli {
    type Handle = CliHandle;

    fn name(&self) -> &'static str {
        TOOL
    }

    fn load(&self) -> bool {
        self.resolve().is_ok()
    }

    fn open_file(&self, path: &Path) -> Result<CliHandle> {
        if !path.is_file() {
            return Err(Error::open_failed(path));
        }

        Ok(CliHandle {
            binary: self.resolve()?,
            path: path.to_path_buf(),
        })
    }

    fn inform(&self, handle: &CliHandle) -> Result<RawReport> {
        tracing::debug!("Running {} on {:?}", TOOL, handle.path);

        let output = Command::new(&handle.binary)
            .arg("--Output=JSON")
            .arg(&handle.path)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(TOOL)
                } else {
                    Error::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tool_failed(TOOL, stderr.to_string()));
        }

        RawReport::from_slice(&output.stdout)
    }

    fn close(&self, handle: CliHandle) {
        tracing::trace!("Closing {:?}", handle.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configured_binary_falls_back_to_path() {
        let cli = MediaInfoCli::with_binary("/nonexistent/mediainfo_12345");
        match cli.resolve() {
            Ok(path) => assert_ne!(path, PathBuf::from("/nonexistent/mediainfo_12345")),
            Err(e) => assert!(matches!(e, Error::ToolNotFound { .. })),
        }
    }

    #[test]
    fn test_configured_binary_is_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("mediainfo");
        std::fs::write(&fake, "").unwrap();

        let cli = MediaInfoCli::with_binary(&fake);
        assert_eq!(cli.resolve().unwrap(), fake);
        assert!(cli.load());
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("mediainfo");
        std::fs::write(&fake, "").unwrap();

        let cli = MediaInfoCli::with_binary(&fake);
        let err = cli.open_file(&dir.path().join("missing.mkv")).unwrap_err();
        assert!(matches!(err, Error::OpenFailed { .. }));
    }
}
