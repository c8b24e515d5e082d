/// The command succeeded.
pub const NO_ERROR: i32 = 0;

/// The command failed before producing any output.
pub const FATAL_ERROR: i32 = 1;

/// The command produced output, but some of the input was skipped.
pub const NON_FATAL_ERROR: i32 = 2;
