// scr-cli/src/main.rs
//
// Entry point for the `scr` binary.
//
// Responsibilities include:
// - Parsing command-line arguments (flags fall back to SCR_* environment variables).
// - Seeding the library search path with the binary's directory and SCR_PATH.
// - Bootstrapping the base directories and initializing file logging.
// - Dispatching to the selected subcommand.
// - Mapping failures to exit codes: 2 for bad arguments, 1 otherwise.

use clap::Parser;
use scr_cli::cli::Cli;
use scr_cli::commands::run_command;
use scr_cli::error::{CliResult, exit_code};
use scr_cli::output::print_error;
use scr_core::{Bootstrap, ErrorMode, ScriptEnv, SearchPath};
use std::env;
use std::ffi::OsStr;
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{} ({})", e, e.code());
        print_error("scr", &e);
        process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let search_path = initial_search_path(cli.search_path.as_deref());
    let mode = ErrorMode::from_debug(cli.debug);

    let mut env = ScriptEnv::bootstrap(Bootstrap::new()?, search_path, mode)?;

    let log_file = env.init_log(&cli.log_level, cli.log_dir.as_deref(), cli.log_name.as_deref())?;
    if let Some(log_file) = log_file {
        log::info!(
            "{} {} starting, logging to {}",
            env.dirs().prog_name(),
            env!("CARGO_PKG_VERSION"),
            log_file.display()
        );
    }

    run_command(&env, &cli.command)
}

/// The binary's own directory comes first, like a script's directory would.
fn initial_search_path(extra: Option<&str>) -> SearchPath {
    let mut entries = Vec::new();
    if let Some(exe_dir) = env::current_exe().ok().as_deref().and_then(Path::parent) {
        entries.push(exe_dir.to_path_buf());
    }
    if let Some(extra) = extra {
        entries.extend_from_slice(SearchPath::from_env_value(OsStr::new(extra)).entries());
    }
    SearchPath::new(entries)
}
