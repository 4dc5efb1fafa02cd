//! Bootstrap launcher for the compiled server artifact.
//!
//! The launcher has exactly one job: verify that the build output exists
//! next to the launcher binary, then hand the process over to it. The
//! decision is a single linear branch (exists → hand off, absent → fail),
//! split into:
//!
//! - [`artifact`]: pure path derivation plus the existence check.
//! - [`handoff`]: side-effecting transfer of control, behind a trait so
//!   orchestration is testable without executing anything.
//! - [`launch`]: coordination of the two into the `run` entry point.

pub mod artifact;
pub mod exit_codes;
pub mod handoff;
pub mod launch;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
