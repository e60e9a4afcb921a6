// scr-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand, ValueEnum};
use scr_core::validators::PathValidator;

use crate::config::DEFAULT_LOG_LEVEL;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "SCR: shared script runtime support",
    long_about = "Bootstraps like every command in a release tree and exposes the \
                  config path resolver, argument validators and version codec to scripts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Report parameter errors with their dedicated kinds.
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Log level: ALL, DEBUG, INFO, WARNING, ERROR, CRITICAL or NONE
    #[arg(long, global = true, value_name = "LEVEL", env = "SCR_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Optional: Log directory, may start with a placeholder such as {{rel}} (defaults to {{log}})
    #[arg(long, global = true, value_name = "LOG_DIR", env = "SCR_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Optional: Log file name without extension (defaults to the program name)
    #[arg(long, global = true, value_name = "NAME")]
    pub log_name: Option<String>,

    /// Optional: Extra library search directories, in PATH syntax
    #[arg(long, global = true, value_name = "PATHS", env = "SCR_PATH")]
    pub search_path: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the bootstrapped base directories and search path
    Dirs {
        /// Print JSON instead of labelled lines
        #[arg(long)]
        json: bool,
    },

    /// Resolves configuration paths with ~ or {{token}} prefixes
    Resolve {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Normalizes dotted version strings
    Version {
        #[arg(required = true, value_name = "VERSION")]
        versions: Vec<String>,

        /// Print the parsed segments as a JSON array
        #[arg(long)]
        parts: bool,
    },

    /// Splits a names list, or the contents of @FILE
    Names {
        #[arg(value_name = "NAMES|@FILE", allow_hyphen_values = true)]
        input: String,
    },

    /// Validates a path argument the way a command would
    Check {
        #[arg(value_enum, value_name = "KIND")]
        kind: CheckKind,

        #[arg(value_name = "PATH")]
        path: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    PossibleFile,
    ReadableDir,
    ReadableFile,
    ReadableAbsDir,
    ReadableAbsFile,
}

impl From<CheckKind> for PathValidator {
    fn from(kind: CheckKind) -> Self {
        match kind {
            CheckKind::PossibleFile => PathValidator::PossibleFile,
            CheckKind::ReadableDir => PathValidator::ReadableDir,
            CheckKind::ReadableFile => PathValidator::ReadableFile,
            CheckKind::ReadableAbsDir => PathValidator::ReadableAbsDir,
            CheckKind::ReadableAbsFile => PathValidator::ReadableAbsFile,
        }
    }
}

impl Commands {
    /// Short name used in log records.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Dirs { .. } => "dirs",
            Commands::Resolve { .. } => "resolve",
            Commands::Version { .. } => "version",
            Commands::Names { .. } => "names",
            Commands::Check { .. } => "check",
        }
    }
}
