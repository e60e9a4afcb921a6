//! Console output helpers.

use console::style;
use std::fmt::Display;

/// Print a labelled value, with the label styled when stdout is a terminal.
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", style(label).cyan(), value);
}

/// Print a bare value, one per line, for consumption by scripts.
pub fn print_value<T: Display>(value: T) {
    println!("{value}");
}

/// Print an error line to stderr.
pub fn print_error(context: &str, message: impl Display) {
    eprintln!("{}: {}", style(context).for_stderr().red().bold(), message);
}
