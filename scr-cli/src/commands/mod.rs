//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

pub mod check;
pub mod dirs;
pub mod names;
pub mod resolve;
pub mod version;

use scr_core::ScriptEnv;

use crate::cli::Commands;
use crate::error::CliResult;

/// Runs the selected subcommand against a bootstrapped environment.
pub fn run_command(env: &ScriptEnv, command: &Commands) -> CliResult<()> {
    log::debug!("running command '{}'", command.name());
    match command {
        Commands::Dirs { json } => dirs::run_dirs(env, *json),
        Commands::Resolve { paths } => resolve::run_resolve(env, paths),
        Commands::Version { versions, parts } => version::run_version(versions, *parts),
        Commands::Names { input } => names::run_names(env, input),
        Commands::Check { kind, path } => check::run_check(env, *kind, path),
    }
}
