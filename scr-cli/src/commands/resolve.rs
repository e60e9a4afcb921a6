//! `scr resolve`: expand `~` and `{{token}}` prefixes.

use scr_core::ScriptEnv;

use crate::error::CliResult;
use crate::output::print_value;

pub fn run_resolve(env: &ScriptEnv, paths: &[String]) -> CliResult<()> {
    for path in paths {
        let resolved = env.resolve(path)?;
        print_value(resolved.display());
    }
    Ok(())
}
