//! Transfer of control to the build artifact.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

/// Abstraction over the final load-and-execute step.
///
/// Tests use recording fakes so the launcher decision can be verified
/// without executing anything.
pub trait Handoff {
    /// Execute `artifact` with the launcher's remaining argv.
    ///
    /// The returned code is the exit status owed to the launcher's caller.
    /// On Unix the production implementation replaces the process image and
    /// only ever returns on failure.
    fn exec(&self, artifact: &Path, args: &[OsString]) -> Result<i32>;
}

/// Production hand-off: the artifact takes over the process.
pub struct ProcessHandoff;

impl Handoff for ProcessHandoff {
    #[cfg(unix)]
    fn exec(&self, artifact: &Path, args: &[OsString]) -> Result<i32> {
        use std::os::unix::process::CommandExt;

        debug!(artifact = %artifact.display(), "replacing process image");
        let err = Command::new(artifact).args(args).exec();
        Err(err).with_context(|| format!("exec {}", artifact.display()))
    }

    #[cfg(not(unix))]
    fn exec(&self, artifact: &Path, args: &[OsString]) -> Result<i32> {
        debug!(artifact = %artifact.display(), "running artifact");
        let status = Command::new(artifact)
            .args(args)
            .status()
            .with_context(|| format!("run {}", artifact.display()))?;
        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::test_support::InstallDir;

    /// `exec` on a non-executable file fails without replacing the test
    /// process, so the error path is observable in-process.
    #[test]
    fn exec_failure_reports_artifact_path() {
        let install = InstallDir::new().expect("install dir");
        let artifact = install.write_artifact(b"not executable").expect("write artifact");

        let err = ProcessHandoff.exec(&artifact, &[]).unwrap_err();
        assert!(err.to_string().contains("exec"));
        assert!(err.to_string().contains(&artifact.display().to_string()));
    }
}
