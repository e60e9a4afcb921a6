//! Shared support library for a family of command-line programs.
//!
//! Every program in a release tree starts the same way: bootstrap the base
//! directories from its own location, extend the library search path, parse
//! arguments with the shared validators, then initialize file logging.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use scr_core::{Bootstrap, ErrorMode, ScriptEnv, SearchPath};
//!
//! let mut env = ScriptEnv::bootstrap(
//!     Bootstrap::new().unwrap(),
//!     SearchPath::default(),
//!     ErrorMode::Plain,
//! ).unwrap();
//!
//! let conf = env.resolve("{{etc}}/report.conf").unwrap();
//! env.init_log("INFO", None, None).unwrap();
//! log::info!("reading {}", conf.display());
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod paths;
pub mod resolver;
pub mod validators;
pub mod version;

// Re-exports for public API
pub use bootstrap::{BaseDirectories, Bootstrap, SearchPath};
pub use config::{ScriptEnv, ScriptEnvBuilder};
pub use error::{ErrorMode, ScrError, ScrResult};
pub use io::{read_file, write_file};
pub use logging::{LogLevel, init_log};
pub use resolver::{ConfigPathToken, resolve_conf_path};
pub use validators::{
    PathValidator, names_list_or_file, possible_file, readable_abs_dir, readable_abs_file,
    readable_dir, readable_file,
};
pub use version::{Version, format_version, parse_version};
