//! Filesystem path helpers shared by the bootstrap, resolver and validators.
//!
//! - `absolute` / `make_absolute`: lexical absolutization, like a shell's
//!   notion of "the path relative to here" with `.` and `..` collapsed.
//! - `expand_user`: leading `~` and `~name` expansion.
//! - `same_file`: existence-tolerant filesystem identity.
//! - `has_access`: `access(2)`-style permission probes.

mod access;
mod identity;
mod users;

pub use access::{Access, has_access};
pub use identity::same_file;
pub use users::home_dir_of;

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Path separators recognized at the start of a placeholder tail.
#[cfg(windows)]
pub const PATH_SEPARATORS: &[char] = &['\\', '/'];
#[cfg(not(windows))]
pub const PATH_SEPARATORS: &[char] = &['/'];

/// Collapses `.` and `..` segments without touching the filesystem.
///
/// Symlinks are not followed, so `a/link/..` becomes `a`. A `..` directly
/// under the root stays at the root.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Makes `path` absolute against `cwd`, then normalizes it.
#[must_use]
pub fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    }
}

/// Makes `path` absolute against the process's current directory.
pub fn make_absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    Ok(absolute(path, &env::current_dir()?))
}

/// Expands a leading `~` or `~/` to the current user's home directory and
/// `~name` or `~name/` to that user's home directory.
///
/// Paths naming an unknown user, and paths without a leading `~`, are
/// returned as given.
#[must_use]
pub fn expand_user(path: &str) -> PathBuf {
    let Some(rest) = path.strip_prefix('~') else {
        return PathBuf::from(path);
    };
    let (user, tail) = rest.split_at(rest.find(PATH_SEPARATORS).unwrap_or(rest.len()));
    if user.is_empty() {
        return PathBuf::from(shellexpand::tilde(path).into_owned());
    }

    match home_dir_of(user) {
        Some(home) => join_home(&home, tail),
        None => PathBuf::from(path),
    }
}

/// `home` without trailing separators, followed by `tail` verbatim.
fn join_home(home: &Path, tail: &str) -> PathBuf {
    let home = normalize(home);
    if home.parent().is_none() && !tail.is_empty() {
        // A home of `/` contributes nothing but the root.
        return PathBuf::from(tail);
    }
    let mut joined = home.into_os_string();
    joined.push(tail);
    PathBuf::from(joined)
}

/// Expands `~`, then makes the result absolute.
pub fn expand_absolute(path: &str) -> io::Result<PathBuf> {
    make_absolute(&expand_user(path))
}

/// Final path component as a string, or an empty string for `/` and `..`.
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
