//! `scr version`: normalize dotted version strings.

use scr_core::version::{format_version, parse_version};

use crate::error::{CliErrorContext, CliResult};
use crate::output::print_value;

pub fn run_version(versions: &[String], parts: bool) -> CliResult<()> {
    for vstr in versions {
        let version = parse_version(vstr);
        if parts {
            let json = serde_json::to_string(&version).cli_context("version")?;
            print_value(json);
        } else {
            print_value(format_version(&version));
        }
    }
    Ok(())
}
