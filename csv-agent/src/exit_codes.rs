//! Stable exit codes for agent CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, config, or other error.
pub const INVALID: i32 = 1;
/// `convert` or `analyze` found a table with zero data rows.
pub const NO_DATA: i32 = 2;
