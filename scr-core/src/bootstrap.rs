// ============================================================================
// scr-core/src/bootstrap.rs
// ============================================================================
//
// PROCESS BOOTSTRAP: Base Directories and Library Search Path
//
// Every command in a release tree lives in `R/bin`. Bootstrap derives the
// release root `R` from the running program's own path and lays out the
// sibling directories from it:
//
//   R/bin      the program's own directory
//   R/etc      configuration
//   R/lib      optional support libraries (gates the search path extension)
//   R/log      default log directory
//   R/schema   schemas
//
// KEY COMPONENTS:
// - BaseDirectories: the computed layout, created once per process
// - SearchPath: ordered library search directories owned by the caller
// - Bootstrap: captures the invocation and computes both
//
// The only tricky part is deduplication of the search path: entries are
// compared by filesystem identity, never by string, so a `lib` directory
// reached through a symlink or a `..` segment is still recognized.

// ---- External crate imports ----
use log::debug;
use serde::Serialize;

// ---- Internal crate imports ----
use crate::error::{ScrError, ScrResult};
use crate::paths::{self, Access};

// ---- Standard library imports ----
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Directory name of the optional support library sibling.
pub const LIB_DIR_NAME: &str = "lib";
/// Directory name of the configuration sibling.
pub const ETC_DIR_NAME: &str = "etc";
/// Directory name of the default log sibling.
pub const LOG_DIR_NAME: &str = "log";
/// Directory name of the schema sibling.
pub const SCHEMA_DIR_NAME: &str = "schema";

// ============================================================================
// BASE DIRECTORIES
// ============================================================================

/// The directory layout computed by [`Bootstrap::run`].
///
/// Exactly one value exists per process. It is immutable apart from the log
/// directory, which log initialization may replace when the caller supplies
/// an override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseDirectories {
    bin_dir: PathBuf,
    cur_dir: PathBuf,
    etc_dir: PathBuf,
    lib_dir: PathBuf,
    log_dir: PathBuf,
    rel_dir: PathBuf,
    schema_dir: PathBuf,
    prog_name: String,
}

impl BaseDirectories {
    /// Lays out the base directories for a program at `program` (absolute).
    pub fn for_program(program: &Path, cur_dir: &Path) -> Self {
        let bin_dir = program.parent().map(Path::to_path_buf).unwrap_or_else(|| program.to_path_buf());
        let rel_dir = bin_dir.parent().map(Path::to_path_buf).unwrap_or_else(|| bin_dir.clone());

        Self {
            etc_dir: rel_dir.join(ETC_DIR_NAME),
            lib_dir: rel_dir.join(LIB_DIR_NAME),
            log_dir: rel_dir.join(LOG_DIR_NAME),
            schema_dir: rel_dir.join(SCHEMA_DIR_NAME),
            cur_dir: cur_dir.to_path_buf(),
            prog_name: paths::base_name(program),
            bin_dir,
            rel_dir,
        }
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Working directory at the time of bootstrap.
    pub fn cur_dir(&self) -> &Path {
        &self.cur_dir
    }

    pub fn etc_dir(&self) -> &Path {
        &self.etc_dir
    }

    /// Candidate library directory; it may not exist.
    pub fn lib_dir(&self) -> &Path {
        &self.lib_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Release root, the parent of the binary directory.
    pub fn rel_dir(&self) -> &Path {
        &self.rel_dir
    }

    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Base name of the running program.
    pub fn prog_name(&self) -> &str {
        &self.prog_name
    }

    pub(crate) fn set_log_dir(&mut self, log_dir: PathBuf) {
        debug!("Log directory changed from {} to {}", self.log_dir.display(), log_dir.display());
        self.log_dir = log_dir;
    }

    /// Pretty-printed JSON rendering, for diagnostics.
    pub fn to_json_pretty(&self) -> ScrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// SEARCH PATH
// ============================================================================

/// Ordered list of directories searched for support libraries.
///
/// Entries are only ever inserted or appended by bootstrap, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Splits a platform path-list value (`PATH` syntax).
    pub fn from_env_value(value: &OsStr) -> Self {
        Self {
            entries: env::split_paths(value)
                .filter(|entry| !entry.as_os_str().is_empty())
                .collect(),
        }
    }

    /// Joins the entries back into a platform path-list value.
    pub fn to_env_value(&self) -> ScrResult<OsString> {
        env::join_paths(&self.entries)
            .map_err(|e| ScrError::Command(format!("cannot export search path: {e}")))
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when an existing entry is filesystem-identical to `dir`.
    ///
    /// Entries that no longer exist are skipped.
    pub fn contains_dir(&self, dir: &Path) -> bool {
        self.entries.iter().any(|entry| paths::same_file(entry, dir))
    }

    /// Finds `name` in the first entry that contains it.
    pub fn find(&self, name: impl AsRef<Path>) -> Option<PathBuf> {
        let name = name.as_ref();
        self.entries
            .iter()
            .map(|entry| entry.join(name))
            .find(|candidate| candidate.exists())
    }

    /// Adds `lib_dir` unless an identical entry is already present.
    ///
    /// The directory goes right after the first entry when that entry is the
    /// program's own directory, and at the end otherwise. Returns whether the
    /// path was changed.
    pub fn add_library_dir(&mut self, lib_dir: &Path, bin_dir: &Path) -> bool {
        if self.contains_dir(lib_dir) {
            debug!("Library directory {} already on search path", lib_dir.display());
            return false;
        }

        match self.entries.first() {
            Some(first) if paths::same_file(first, bin_dir) => {
                self.entries.insert(1, lib_dir.to_path_buf());
            }
            _ => self.entries.push(lib_dir.to_path_buf()),
        }
        debug!("Added library directory {} to search path", lib_dir.display());
        true
    }
}

// ============================================================================
// BOOTSTRAP
// ============================================================================

/// Captures how the program was invoked and computes its base directories.
///
/// # Examples
///
/// ```rust,no_run
/// use scr_core::bootstrap::{Bootstrap, SearchPath};
///
/// let mut search_path = SearchPath::default();
/// let dirs = Bootstrap::new().unwrap().run(&mut search_path).unwrap();
/// println!("configuration lives in {}", dirs.etc_dir().display());
/// ```
#[derive(Debug, Clone)]
pub struct Bootstrap {
    program_path: PathBuf,
    current_dir: PathBuf,
}

impl Bootstrap {
    /// Captures argv[0] and the current working directory.
    ///
    /// A bare argv[0] means the binary was found through `PATH`, so the
    /// running executable's own path is used instead.
    pub fn new() -> ScrResult<Self> {
        let argv0 = env::args_os()
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| ScrError::Command("program path unavailable (empty argv)".to_string()))?;
        let program_path = if has_dir_component(&argv0) {
            argv0
        } else {
            env::current_exe()?
        };
        Ok(Self {
            program_path,
            current_dir: env::current_dir()?,
        })
    }

    /// Uses an explicit invocation instead of the process's own.
    pub fn with_invocation(program_path: impl Into<PathBuf>, current_dir: impl Into<PathBuf>) -> Self {
        Self {
            program_path: program_path.into(),
            current_dir: current_dir.into(),
        }
    }

    pub fn program_path(mut self, program_path: impl Into<PathBuf>) -> Self {
        self.program_path = program_path.into();
        self
    }

    pub fn current_dir(mut self, current_dir: impl Into<PathBuf>) -> Self {
        self.current_dir = current_dir.into();
        self
    }

    /// Computes the base directories and extends `search_path` with the
    /// library directory when it exists and can be traversed.
    ///
    /// A missing library directory is the normal case and not an error.
    pub fn run(self, search_path: &mut SearchPath) -> ScrResult<BaseDirectories> {
        let program = paths::absolute(&self.program_path, &self.current_dir);
        let dirs = BaseDirectories::for_program(&program, &self.current_dir);
        debug!(
            "Bootstrap: program {} in release root {}",
            program.display(),
            dirs.rel_dir().display()
        );

        let lib_dir = dirs.lib_dir();
        if lib_dir.is_dir() && paths::has_access(lib_dir, Access::READ | Access::EXECUTE) {
            search_path.add_library_dir(lib_dir, dirs.bin_dir());
        } else {
            debug!("No usable library directory at {}", lib_dir.display());
        }

        Ok(dirs)
    }
}

/// True when `path` names a directory as well as a file (`./scr`, `bin/scr`).
fn has_dir_component(path: &Path) -> bool {
    path.parent().is_some_and(|parent| !parent.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn bare_program_name_has_no_dir_component() {
        assert!(!has_dir_component(Path::new("scr")));
        assert!(has_dir_component(Path::new("./scr")));
        assert!(has_dir_component(Path::new("bin/scr")));
        assert!(has_dir_component(Path::new("/opt/release/bin/scr")));
    }

    fn release_tree(with_lib: bool) -> tempfile::TempDir {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("bin")).unwrap();
        if with_lib {
            fs::create_dir(root.path().join("lib")).unwrap();
        }
        root
    }

    #[test]
    fn layout_is_relative_to_release_root() {
        let dirs = BaseDirectories::for_program(Path::new("/opt/rel/bin/tool"), Path::new("/home/u"));
        assert_eq!(dirs.bin_dir(), Path::new("/opt/rel/bin"));
        assert_eq!(dirs.rel_dir(), Path::new("/opt/rel"));
        assert_eq!(dirs.etc_dir(), Path::new("/opt/rel/etc"));
        assert_eq!(dirs.lib_dir(), Path::new("/opt/rel/lib"));
        assert_eq!(dirs.log_dir(), Path::new("/opt/rel/log"));
        assert_eq!(dirs.schema_dir(), Path::new("/opt/rel/schema"));
        assert_eq!(dirs.cur_dir(), Path::new("/home/u"));
        assert_eq!(dirs.prog_name(), "tool");
    }

    #[test]
    fn relative_invocation_is_resolved_against_cwd() {
        let mut search_path = SearchPath::default();
        let dirs = Bootstrap::with_invocation("./bin/../bin/tool", "/opt/rel")
            .run(&mut search_path)
            .unwrap();
        assert_eq!(dirs.bin_dir(), Path::new("/opt/rel/bin"));
        assert_eq!(dirs.prog_name(), "tool");
    }

    #[test]
    fn missing_lib_leaves_search_path_alone() {
        let root = release_tree(false);
        let bin = root.path().join("bin");
        let mut search_path = SearchPath::new(vec![bin.clone()]);

        Bootstrap::with_invocation(bin.join("tool"), root.path())
            .run(&mut search_path)
            .unwrap();
        assert_eq!(search_path.entries(), &[bin]);
    }

    #[test]
    fn lib_is_inserted_after_program_dir() {
        let root = release_tree(true);
        let bin = root.path().join("bin");
        let other = tempdir().unwrap();
        let mut search_path = SearchPath::new(vec![bin.clone(), other.path().to_path_buf()]);

        let dirs = Bootstrap::with_invocation(bin.join("tool"), root.path())
            .run(&mut search_path)
            .unwrap();
        assert_eq!(
            search_path.entries(),
            &[bin, dirs.lib_dir().to_path_buf(), other.path().to_path_buf()]
        );
    }

    #[test]
    fn lib_is_appended_when_first_entry_is_elsewhere() {
        let root = release_tree(true);
        let other = tempdir().unwrap();
        let mut search_path = SearchPath::new(vec![other.path().to_path_buf()]);

        let dirs = Bootstrap::with_invocation(root.path().join("bin/tool"), root.path())
            .run(&mut search_path)
            .unwrap();
        assert_eq!(search_path.entries().last().unwrap(), dirs.lib_dir());
        assert_eq!(search_path.len(), 2);
    }

    #[test]
    fn empty_search_path_gets_lib_appended() {
        let root = release_tree(true);
        let mut search_path = SearchPath::default();
        Bootstrap::with_invocation(root.path().join("bin/tool"), root.path())
            .run(&mut search_path)
            .unwrap();
        assert_eq!(search_path.len(), 1);
    }

    #[test]
    fn nonexistent_entries_are_skipped_when_deduplicating() {
        let root = release_tree(true);
        let bin = root.path().join("bin");
        let mut search_path = SearchPath::new(vec![bin.clone(), PathBuf::from("/surely/not/here/42")]);

        Bootstrap::with_invocation(bin.join("tool"), root.path())
            .run(&mut search_path)
            .unwrap();
        assert_eq!(search_path.len(), 3);
        assert_eq!(search_path.entries()[1], root.path().join("lib"));
    }

    #[test]
    fn search_path_env_value_round_trips() {
        let search_path = SearchPath::new(vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        let value = search_path.to_env_value().unwrap();
        assert_eq!(SearchPath::from_env_value(&value), search_path);
    }

    #[test]
    fn find_returns_first_match() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::write(second.path().join("helper.sh"), "").unwrap();
        fs::write(first.path().join("other.sh"), "").unwrap();

        let search_path = SearchPath::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(search_path.find("helper.sh"), Some(second.path().join("helper.sh")));
        assert_eq!(search_path.find("missing.sh"), None);
    }

    #[test]
    fn base_directories_serialize_to_json() {
        let dirs = BaseDirectories::for_program(Path::new("/opt/rel/bin/tool"), Path::new("/"));
        let json = dirs.to_json_pretty().unwrap();
        assert!(json.contains("\"prog_name\": \"tool\""));
        assert!(json.contains("/opt/rel/schema"));
    }
}
