// scr-cli/src/config.rs
//
// Defines default configuration constants for the `scr-cli` application.

/// Logging stays off unless a level is requested.
pub const DEFAULT_LOG_LEVEL: &str = "NONE";

/// Exit status for bad arguments, matching clap's own usage errors.
pub const EXIT_PARAM_ERROR: i32 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;
