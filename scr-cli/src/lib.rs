// scr-cli/src/lib.rs
//
// Library portion of the SCR CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{CheckKind, Cli, Commands};
pub use commands::run_command;
pub use error::{CliErrorContext, CliResult, exit_code};
