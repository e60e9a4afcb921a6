// ============================================================================
// scr-core/src/config.rs
// ============================================================================
//
// SCRIPT ENVIRONMENT: The Once-Per-Process Configuration Object
//
// A command bootstraps exactly one ScriptEnv at startup and passes it by
// reference to everything that needs base directories, the search path or
// the error mode. Nothing in this crate keeps those values in globals; the
// only process-wide state is the `log` facade itself.
//
// KEY COMPONENTS:
// - ScriptEnv: base directories + search path + error mode
// - ScriptEnvBuilder: fluent construction, mainly for tests and embedding

// ---- Internal crate imports ----
use crate::bootstrap::{BaseDirectories, Bootstrap, SearchPath};
use crate::error::{ErrorMode, ScrResult};
use crate::logging;
use crate::resolver;
use crate::validators;

// ---- Standard library imports ----
use std::path::PathBuf;

/// Everything a command needs after bootstrap.
///
/// The log directory inside [`BaseDirectories`] is updated in place when
/// [`ScriptEnv::init_log`] is given an override.
#[derive(Debug, Clone)]
pub struct ScriptEnv {
    dirs: BaseDirectories,
    search_path: SearchPath,
    mode: ErrorMode,
}

impl ScriptEnv {
    /// Runs `bootstrap` against `search_path` and keeps the result.
    pub fn bootstrap(bootstrap: Bootstrap, mut search_path: SearchPath, mode: ErrorMode) -> ScrResult<Self> {
        let dirs = bootstrap.run(&mut search_path)?;
        Ok(Self { dirs, search_path, mode })
    }

    pub fn dirs(&self) -> &BaseDirectories {
        &self.dirs
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn mode(&self) -> ErrorMode {
        self.mode
    }

    /// See [`resolver::resolve_conf_path`].
    pub fn resolve(&self, path: &str) -> ScrResult<PathBuf> {
        resolver::resolve_conf_path(&self.dirs, self.mode, path)
    }

    /// See [`logging::init_log`].
    pub fn init_log(&mut self, level: &str, logdir: Option<&str>, logname: Option<&str>) -> ScrResult<Option<PathBuf>> {
        logging::init_log(&mut self.dirs, self.mode, level, logdir, logname)
    }

    pub fn possible_file(&self, path: &str) -> ScrResult<PathBuf> {
        validators::possible_file(self.mode, path)
    }

    pub fn readable_dir(&self, path: &str) -> ScrResult<PathBuf> {
        validators::readable_dir(self.mode, path)
    }

    pub fn readable_file(&self, path: &str) -> ScrResult<PathBuf> {
        validators::readable_file(self.mode, path)
    }

    pub fn names_list_or_file(&self, param: &str) -> ScrResult<Vec<String>> {
        validators::names_list_or_file(self.mode, param)
    }
}

/// Builder for [`ScriptEnv`].
///
/// # Examples
///
/// ```rust
/// use scr_core::config::ScriptEnvBuilder;
///
/// let env = ScriptEnvBuilder::new()
///     .program_path("/opt/release/bin/report")
///     .current_dir("/tmp")
///     .debug(true)
///     .build()
///     .unwrap();
/// assert_eq!(env.dirs().prog_name(), "report");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptEnvBuilder {
    program_path: Option<PathBuf>,
    current_dir: Option<PathBuf>,
    search_path: SearchPath,
    debug: bool,
}

impl ScriptEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides argv[0].
    pub fn program_path(mut self, program_path: impl Into<PathBuf>) -> Self {
        self.program_path = Some(program_path.into());
        self
    }

    /// Overrides the working directory used to absolutize the program path.
    pub fn current_dir(mut self, current_dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(current_dir.into());
        self
    }

    pub fn search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    /// Selects the debug presentation of parameter errors.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Bootstraps the environment; unset invocation details come from the
    /// running process.
    pub fn build(self) -> ScrResult<ScriptEnv> {
        let bootstrap = match (self.program_path, self.current_dir) {
            (Some(program), Some(cwd)) => Bootstrap::with_invocation(program, cwd),
            (program, cwd) => {
                let mut bootstrap = Bootstrap::new()?;
                if let Some(program) = program {
                    bootstrap = bootstrap.program_path(program);
                }
                if let Some(cwd) = cwd {
                    bootstrap = bootstrap.current_dir(cwd);
                }
                bootstrap
            }
        };

        ScriptEnv::bootstrap(bootstrap, self.search_path, ErrorMode::from_debug(self.debug))
    }
}
