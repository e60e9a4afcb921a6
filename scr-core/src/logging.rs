//! Process-wide logging setup.
//!
//! This module handles:
//! - Mapping symbolic level names (`ALL` … `CRITICAL`, `NONE`) to thresholds
//! - Choosing, creating and checking the log directory
//! - Configuring a log4rs file appender with the fixed line format
//!   `YYYY-MM-DD HH:MM:SS LEVEL   message`
//!
//! The first successful [`init_log`] installs the logger; later calls
//! reconfigure it in place through the retained log4rs handle.

use log::{LevelFilter, Record, debug};
use log4rs::{
    Handle,
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::{self, Encode},
};
use once_cell::sync::OnceCell;

use crate::bootstrap::BaseDirectories;
use crate::error::{ErrorMode, ScrError, ScrResult};
use crate::paths::{self, Access};
use crate::resolver::resolve_conf_path;

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Timestamp layout of every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Extension appended to the log name.
pub const LOG_FILE_EXTENSION: &str = "log";

static LOGGER: OnceCell<Handle> = OnceCell::new();

/// Symbolic log levels accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Disables logging entirely.
    None,
    All,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub const NAMES: [(&'static str, LogLevel); 7] = [
        ("ALL", LogLevel::All),
        ("DEBUG", LogLevel::Debug),
        ("INFO", LogLevel::Info),
        ("WARNING", LogLevel::Warning),
        ("ERROR", LogLevel::Error),
        ("CRITICAL", LogLevel::Critical),
        ("NONE", LogLevel::None),
    ];

    /// Ordered severity; negative means "disabled".
    pub fn severity(self) -> i32 {
        match self {
            LogLevel::None => -1,
            LogLevel::All => 0,
            LogLevel::Debug => 10,
            LogLevel::Info => 20,
            LogLevel::Warning => 30,
            LogLevel::Error => 40,
            LogLevel::Critical => 50,
        }
    }

    pub fn is_disabled(self) -> bool {
        self.severity() < 0
    }

    /// Threshold for the `log` facade. `log` has no level above error, so
    /// `CRITICAL` shares the error threshold and ERROR records still pass.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::None => LevelFilter::Off,
            LogLevel::All => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            // ERROR records are still written at CRITICAL.
            LogLevel::Error | LogLevel::Critical => LevelFilter::Error,
        }
    }

    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, level)| *level == self)
            .map(|(name, _)| *name)
            .unwrap_or("NONE")
    }
}

impl FromStr for LogLevel {
    type Err = ScrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_uppercase();
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, level)| *level)
            .ok_or(ScrError::Lookup { table: "log level", key })
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Level name as written to the log file.
pub fn record_level_name(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARNING",
        log::Level::Info => "INFO",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

/// Writes `YYYY-MM-DD HH:MM:SS LEVEL   message` lines in local time.
#[derive(Debug, Default)]
pub struct LineEncoder;

impl Encode for LineEncoder {
    fn encode(&self, w: &mut dyn encode::Write, record: &Record) -> anyhow::Result<()> {
        writeln!(
            w,
            "{} {:<7} {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            record_level_name(record.level()),
            record.args()
        )?;
        Ok(())
    }
}

/// Initializes file logging.
///
/// * `level` - symbolic level name, case-insensitive; `NONE` disables all
///   logging and returns without touching the filesystem
/// * `logdir` - optional directory, resolved like a configuration path; it
///   replaces the log directory in `dirs` for the rest of the process
/// * `logname` - file name stem, defaulting to the program name
///
/// Returns the log file path, or `None` when logging was disabled.
///
/// # Errors
///
/// * `ScrError::Lookup` - unknown level name or placeholder
/// * a parameter value error - the directory path exists but is not a
///   directory, or lacks read/write/traverse permission
/// * `ScrError::Io` - the directory could not be created (only the last
///   path component is ever created)
/// * `ScrError::Logging` - log4rs rejected the configuration
pub fn init_log(
    dirs: &mut BaseDirectories,
    mode: ErrorMode,
    level: &str,
    logdir: Option<&str>,
    logname: Option<&str>,
) -> ScrResult<Option<PathBuf>> {
    let level: LogLevel = level.parse()?;
    if level.is_disabled() {
        log::set_max_level(LevelFilter::Off);
        return Ok(None);
    }

    if let Some(requested) = logdir.filter(|d| !d.is_empty()) {
        let resolved = resolve_conf_path(dirs, mode, requested)?;
        dirs.set_log_dir(resolved);
    }
    let logdir = dirs.log_dir().to_path_buf();

    if !logdir.is_dir() {
        if logdir.exists() {
            return Err(mode.value_error(format!("not a directory: '{}'", logdir.display())));
        }
        fs::create_dir(&logdir)?;
    }
    if !paths::has_access(&logdir, Access::ALL) {
        return Err(mode.value_error(format!(
            "insufficient directory permissions: '{}'",
            logdir.display()
        )));
    }

    let logname = logname.filter(|n| !n.is_empty()).unwrap_or(dirs.prog_name());
    let logfile = logdir.join(format!("{logname}.{LOG_FILE_EXTENSION}"));

    let appender = FileAppender::builder()
        .append(true)
        .encoder(Box::new(LineEncoder))
        .build(&logfile)?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level.level_filter()))
        .map_err(|e| ScrError::Logging(e.to_string()))?;

    install(config)?;
    log::set_max_level(level.level_filter());
    debug!("Logging at {} to {}", level, logfile.display());

    Ok(Some(logfile))
}

fn install(config: Config) -> ScrResult<()> {
    if let Some(handle) = LOGGER.get() {
        handle.set_config(config);
        return Ok(());
    }

    let handle = log4rs::init_config(config).map_err(|e| ScrError::Logging(e.to_string()))?;
    // A racing initializer would already have failed in init_config.
    let _ = LOGGER.set(handle);
    Ok(())
}
