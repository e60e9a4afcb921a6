//! `scr names`: split a names list, or read one from `@FILE`.

use scr_core::ScriptEnv;

use crate::error::{CliErrorContext, CliResult};
use crate::output::print_value;

pub fn run_names(env: &ScriptEnv, input: &str) -> CliResult<()> {
    let names = env.names_list_or_file(input).cli_context("NamesListOrFile")?;
    for name in names {
        print_value(name);
    }
    Ok(())
}
