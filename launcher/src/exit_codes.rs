//! Stable exit codes for the launcher.

/// Hand-off succeeded; any later exit status belongs to the artifact.
pub const OK: i32 = 0;
/// The expected build artifact does not exist.
pub const MISSING_ARTIFACT: i32 = 1;
