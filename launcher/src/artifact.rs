//! Location and presence of the compiled server artifact.
//!
//! The artifact lives at a fixed path relative to the launcher binary. It
//! is produced by a separate build step; the launcher only ever asks one
//! question about it: does a regular file exist there?

use std::path::{Path, PathBuf};

/// Relative path from the launcher's directory to the build output.
#[cfg(not(windows))]
pub const ARTIFACT_RELATIVE: &str = "dist/server";
/// Relative path from the launcher's directory to the build output.
#[cfg(windows)]
pub const ARTIFACT_RELATIVE: &str = "dist/server.exe";

/// Fixed diagnostic for the missing-artifact path.
pub const MISSING_ARTIFACT_MESSAGE: &str = "Build output not found. Run the build step first.";

/// Absolute path of the expected artifact for a launcher installed at
/// `launcher_dir`.
pub fn artifact_path(launcher_dir: &Path) -> PathBuf {
    launcher_dir.join(ARTIFACT_RELATIVE)
}

/// Locate the artifact, returning its path only if a regular file exists
/// there. A directory or dangling symlink at the expected path counts as
/// absent.
pub fn locate(launcher_dir: &Path) -> Option<PathBuf> {
    let path = artifact_path(launcher_dir);
    if path.is_file() { Some(path) } else { None }
}
