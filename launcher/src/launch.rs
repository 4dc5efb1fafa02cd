//! Orchestration of the launcher's single decision.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::artifact;
use crate::handoff::Handoff;

/// Terminal outcomes of a launcher invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The artifact ran; carries the exit status owed to the caller. On
    /// Unix the process image was replaced and this variant is never
    /// observed in production.
    Handed(i32),
    /// No artifact at the expected path. The caller prints the fixed
    /// diagnostic and exits with `MISSING_ARTIFACT`.
    MissingArtifact { expected: PathBuf },
}

/// Directory containing the running launcher binary.
pub fn launcher_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("resolve launcher executable path")?;
    let dir = exe
        .parent()
        .context("launcher executable has no parent directory")?;
    Ok(dir.to_path_buf())
}

/// Check for the artifact and hand off if present.
///
/// The check is purely a function of filesystem state; repeated calls with
/// an absent artifact always produce the same outcome. Failures *inside*
/// the hand-off (artifact present but not runnable) propagate as errors and
/// are never folded into [`Outcome::MissingArtifact`].
pub fn run<H: Handoff>(launcher_dir: &Path, args: &[OsString], handoff: &H) -> Result<Outcome> {
    match artifact::locate(launcher_dir) {
        Some(path) => {
            info!(artifact = %path.display(), "handing off to build artifact");
            let code = handoff.exec(&path, args)?;
            Ok(Outcome::Handed(code))
        }
        None => {
            let expected = artifact::artifact_path(launcher_dir);
            debug!(expected = %expected.display(), "build artifact absent");
            Ok(Outcome::MissingArtifact { expected })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InstallDir;
    use std::cell::RefCell;

    /// Records hand-off calls instead of executing anything.
    struct RecordingHandoff {
        code: i32,
        calls: RefCell<Vec<PathBuf>>,
    }

    impl RecordingHandoff {
        fn new(code: i32) -> Self {
            Self {
                code,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Handoff for RecordingHandoff {
        fn exec(&self, artifact: &Path, _args: &[OsString]) -> Result<i32> {
            self.calls.borrow_mut().push(artifact.to_path_buf());
            Ok(self.code)
        }
    }

    #[test]
    fn absent_artifact_never_reaches_handoff() {
        let install = InstallDir::new().expect("install dir");
        let handoff = RecordingHandoff::new(0);

        let outcome = run(install.path(), &[], &handoff).expect("run");

        assert_eq!(
            outcome,
            Outcome::MissingArtifact {
                expected: artifact::artifact_path(install.path()),
            }
        );
        assert!(handoff.calls.borrow().is_empty());
    }

    #[test]
    fn present_artifact_hands_off_exactly_once() {
        let install = InstallDir::new().expect("install dir");
        // An empty file is enough; content is the artifact's business.
        let artifact_path = install.write_artifact(b"").expect("write artifact");
        let handoff = RecordingHandoff::new(0);

        let outcome = run(install.path(), &[], &handoff).expect("run");

        assert_eq!(outcome, Outcome::Handed(0));
        assert_eq!(*handoff.calls.borrow(), vec![artifact_path]);
    }

    #[test]
    fn handed_outcome_carries_artifact_exit_status() {
        let install = InstallDir::new().expect("install dir");
        install.write_artifact(b"").expect("write artifact");
        let handoff = RecordingHandoff::new(7);

        let outcome = run(install.path(), &[], &handoff).expect("run");
        assert_eq!(outcome, Outcome::Handed(7));
    }

    #[test]
    fn absent_artifact_outcome_is_repeatable() {
        let install = InstallDir::new().expect("install dir");
        let handoff = RecordingHandoff::new(0);

        let first = run(install.path(), &[], &handoff).expect("first run");
        let second = run(install.path(), &[], &handoff).expect("second run");

        assert_eq!(first, second);
        assert!(handoff.calls.borrow().is_empty());
    }
}
