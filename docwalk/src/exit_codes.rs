//! Stable exit codes for docwalk CLI commands.

/// Run finished normally. Cancelling the dialog, an unsupported or missing
/// selection, an empty directory, and an interrupt during a wait all end the
/// run on purpose and share this code.
pub const OK: i32 = 0;
/// Unexpected failure: unreadable directory, invalid configuration, or a
/// selected file missing from its own catalog.
pub const ERROR: i32 = 1;
/// An open command failed mid-sequence and the remaining documents were
/// abandoned.
pub const ABORTED: i32 = 2;
