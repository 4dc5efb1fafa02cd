//! Test-only helpers for building fake install layouts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::artifact;

/// Temporary install directory standing in for a deployed launcher layout.
pub struct InstallDir {
    temp: TempDir,
}

impl InstallDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create install dir")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Create the artifact at its expected relative path with the given
    /// contents (no execute permission).
    pub fn write_artifact(&self, contents: &[u8]) -> Result<PathBuf> {
        let path = artifact::artifact_path(self.path());
        let parent = path.parent().context("artifact path has no parent")?;
        fs::create_dir_all(parent).context("create dist directory")?;
        fs::write(&path, contents)
            .with_context(|| format!("write artifact {}", path.display()))?;
        Ok(path)
    }

    /// Create an executable artifact script at the expected path.
    #[cfg(unix)]
    pub fn write_executable_artifact(&self, script: &str) -> Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write_artifact(script.as_bytes())?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("chmod artifact {}", path.display()))?;
        Ok(path)
    }

    /// Copy a built launcher binary into the install dir so that artifact
    /// resolution happens relative to the staged location.
    pub fn stage_launcher(&self, built_binary: &Path) -> Result<PathBuf> {
        let staged = self.path().join(
            built_binary
                .file_name()
                .context("launcher binary has no file name")?,
        );
        fs::copy(built_binary, &staged)
            .with_context(|| format!("stage launcher at {}", staged.display()))?;
        Ok(staged)
    }
}
