//! Whole-file read and write helpers.

use crate::error::ScrResult;

use std::fs;
use std::io::Write;
use std::path::Path;

/// Reads the entire file at `path` as text.
pub fn read_file(path: impl AsRef<Path>) -> ScrResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Creates or truncates the file at `path`.
///
/// When `mode` is given the permission bits are set right after creation,
/// before any content is written (ignored on non-Unix platforms). Returns the
/// number of bytes written, zero when there is no content.
pub fn write_file(path: impl AsRef<Path>, content: Option<&str>, mode: Option<u32>) -> ScrResult<usize> {
    let path = path.as_ref();
    let mut file = fs::File::create(path)?;

    if let Some(mode) = mode {
        set_mode(path, mode)?;
    }

    match content {
        Some(text) if !text.is_empty() => {
            file.write_all(text.as_bytes())?;
            Ok(text.len())
        }
        _ => Ok(0),
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
