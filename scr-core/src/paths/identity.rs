//! Filesystem identity of paths.

use std::fs;
use std::path::Path;

/// True when `a` and `b` both exist and name the same file or directory.
///
/// Different spellings of one directory (symlinks, `..` segments, relative
/// versus absolute) compare equal. A path that does not exist is never
/// identical to anything, including itself.
#[must_use]
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(meta_a), Ok(meta_b)) => same_identity(a, &meta_a, b, &meta_b),
        _ => false,
    }
}

#[cfg(unix)]
fn same_identity(_a: &Path, meta_a: &fs::Metadata, _b: &Path, meta_b: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    meta_a.dev() == meta_b.dev() && meta_a.ino() == meta_b.ino()
}

#[cfg(not(unix))]
fn same_identity(a: &Path, _meta_a: &fs::Metadata, b: &Path, _meta_b: &fs::Metadata) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn dotted_spelling_is_same_directory() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("lib");
        fs::create_dir(&sub).unwrap();

        let dotted = dir.path().join("lib").join("..").join("lib");
        assert!(same_file(&sub, &dotted));
        assert!(!same_file(&sub, dir.path()));
    }

    #[test]
    fn missing_paths_are_never_identical() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(!same_file(&missing, &missing));
        assert!(!same_file(dir.path(), &missing));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_same_directory() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        assert!(same_file(&real, &link));
    }
}
