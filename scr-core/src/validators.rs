// ============================================================================
// scr-core/src/validators.rs
// ============================================================================
//
// ARGUMENT VALIDATORS: Checks for Command-Line Parameters
//
// Each validator takes the raw argument string and either returns a
// normalized value or a parameter error naming the offending path. They are
// meant to be called by the argument-parsing layer, which reports the
// validator's name alongside the message.
//
// PERMISSION POLICY:
// - an existing file must be at least readable OR writeable
// - a file that does not exist yet needs an existing, writeable parent
// - "readable" directories must be WRITEABLE; the name is historical and
//   callers depend on the write requirement

// ---- Internal crate imports ----
use crate::error::{ErrorMode, ScrResult};
use crate::io::read_file;
use crate::paths::{self, Access};

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

/// Accepts an existing file with sufficient permissions, or a path that
/// could be created: its parent directory exists and is writeable.
///
/// `~` and relative segments are expanded first; the absolute path is
/// returned.
pub fn possible_file(mode: ErrorMode, path: &str) -> ScrResult<PathBuf> {
    let fp = paths::expand_absolute(path)?;

    if fp.exists() {
        if !fp.is_file() {
            return Err(mode.value_error(format!("exists but not a file: '{}'", fp.display())));
        }
        if !(paths::has_access(&fp, Access::READ) || paths::has_access(&fp, Access::WRITE)) {
            return Err(mode.value_error(format!("insufficient file permissions: '{}'", fp.display())));
        }
    } else {
        let dp = fp.parent().unwrap_or(fp.as_path());
        if !dp.is_dir() {
            return Err(mode.value_error(format!("not a directory: '{}'", dp.display())));
        }
        if !paths::has_access(dp, Access::WRITE) {
            return Err(mode.value_error(format!(
                "insufficient directory permissions: '{}'",
                dp.display()
            )));
        }
    }

    Ok(fp)
}

/// Requires an existing directory with WRITE access; returns `path` as given.
pub fn readable_abs_dir(mode: ErrorMode, path: &str) -> ScrResult<PathBuf> {
    check_writeable_dir(mode, Path::new(path))?;
    Ok(PathBuf::from(path))
}

/// Like [`readable_abs_dir`] after expanding `~` and making `path` absolute.
pub fn readable_dir(mode: ErrorMode, path: &str) -> ScrResult<PathBuf> {
    let dp = paths::expand_absolute(path)?;
    check_writeable_dir(mode, &dp)?;
    Ok(dp)
}

/// Requires an existing, readable regular file; returns `path` as given.
pub fn readable_abs_file(mode: ErrorMode, path: &str) -> ScrResult<PathBuf> {
    check_readable_file(mode, Path::new(path))?;
    Ok(PathBuf::from(path))
}

/// Like [`readable_abs_file`] after expanding `~` and making `path` absolute.
pub fn readable_file(mode: ErrorMode, path: &str) -> ScrResult<PathBuf> {
    let fp = paths::expand_absolute(path)?;
    check_readable_file(mode, &fp)?;
    Ok(fp)
}

/// Splits a names list on commas and whitespace.
///
/// A leading `@` makes the rest of the argument a file name whose contents
/// are split instead. Order and duplicates are kept; deduplication is up to
/// the consumer.
pub fn names_list_or_file(mode: ErrorMode, param: &str) -> ScrResult<Vec<String>> {
    let source = match param.strip_prefix('@') {
        Some(file) => read_file(readable_file(mode, file)?)?,
        None => param.to_string(),
    };

    Ok(source
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect())
}

fn check_writeable_dir(mode: ErrorMode, dp: &Path) -> ScrResult<()> {
    if !dp.is_dir() {
        return Err(mode.value_error(format!("not a directory: '{}'", dp.display())));
    }
    if !paths::has_access(dp, Access::WRITE) {
        return Err(mode.value_error(format!(
            "insufficient directory permissions: '{}'",
            dp.display()
        )));
    }
    Ok(())
}

fn check_readable_file(mode: ErrorMode, fp: &Path) -> ScrResult<()> {
    if !(fp.is_file() && paths::has_access(fp, Access::READ)) {
        return Err(mode.value_error(format!("not a readable file: '{}'", fp.display())));
    }
    Ok(())
}

/// Named validators, for layers that pick one by name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathValidator {
    PossibleFile,
    ReadableAbsDir,
    ReadableDir,
    ReadableAbsFile,
    ReadableFile,
}

impl PathValidator {
    /// Name reported alongside a failure.
    pub fn name(self) -> &'static str {
        match self {
            PathValidator::PossibleFile => "PossibleFile",
            PathValidator::ReadableAbsDir => "ReadableAbsDir",
            PathValidator::ReadableDir => "ReadableDir",
            PathValidator::ReadableAbsFile => "ReadableAbsFile",
            PathValidator::ReadableFile => "ReadableFile",
        }
    }

    pub fn check(self, mode: ErrorMode, path: &str) -> ScrResult<PathBuf> {
        match self {
            PathValidator::PossibleFile => possible_file(mode, path),
            PathValidator::ReadableAbsDir => readable_abs_dir(mode, path),
            PathValidator::ReadableDir => readable_dir(mode, path),
            PathValidator::ReadableAbsFile => readable_abs_file(mode, path),
            PathValidator::ReadableFile => readable_file(mode, path),
        }
    }
}
