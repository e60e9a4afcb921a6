//! `scr dirs`: show what bootstrap derived from the program location.

use scr_core::ScriptEnv;

use crate::error::{CliErrorContext, CliResult};
use crate::output::print_info;

pub fn run_dirs(env: &ScriptEnv, json: bool) -> CliResult<()> {
    let dirs = env.dirs();

    if json {
        let text = dirs.to_json_pretty().cli_context("dirs")?;
        println!("{text}");
        return Ok(());
    }

    print_info("prog", dirs.prog_name());
    print_info("bin", dirs.bin_dir().display());
    print_info("cur", dirs.cur_dir().display());
    print_info("rel", dirs.rel_dir().display());
    print_info("etc", dirs.etc_dir().display());
    print_info("lib", dirs.lib_dir().display());
    print_info("log", dirs.log_dir().display());
    print_info("schema", dirs.schema_dir().display());
    for entry in env.search_path().entries() {
        print_info("path", entry.display());
    }
    Ok(())
}
