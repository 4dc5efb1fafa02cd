//! Process entry point: check for the build artifact, then hand off.
//!
//! Two terminal outcomes only. Either the artifact is absent and the
//! launcher exits 1 with a fixed diagnostic, or control transfers to the
//! artifact and every later exit status is the artifact's own.

use std::env;
use std::ffi::OsString;
use std::process;

use anyhow::Result;
use launcher::artifact::MISSING_ARTIFACT_MESSAGE;
use launcher::exit_codes;
use launcher::handoff::ProcessHandoff;
use launcher::launch::{self, Outcome};
use launcher::logging;

fn main() {
    logging::init();
    match boot() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(1);
        }
    }
}

fn boot() -> Result<i32> {
    let dir = launch::launcher_dir()?;
    // Forwarded verbatim; the launcher parses nothing.
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    match launch::run(&dir, &args, &ProcessHandoff)? {
        Outcome::Handed(code) => Ok(code),
        Outcome::MissingArtifact { .. } => {
            eprintln!("{MISSING_ARTIFACT_MESSAGE}");
            Ok(exit_codes::MISSING_ARTIFACT)
        }
    }
}
