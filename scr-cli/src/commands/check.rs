//! `scr check`: run one of the path validators and print the accepted path.

use scr_core::ScriptEnv;
use scr_core::validators::PathValidator;

use crate::cli::CheckKind;
use crate::error::{CliErrorContext, CliResult};
use crate::output::print_value;

pub fn run_check(env: &ScriptEnv, kind: CheckKind, path: &str) -> CliResult<()> {
    let validator = PathValidator::from(kind);
    let accepted = validator.check(env.mode(), path).cli_context(validator.name())?;
    log::info!("{} accepted '{}'", validator.name(), accepted.display());
    print_value(accepted.display());
    Ok(())
}
