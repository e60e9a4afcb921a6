//! Permission probes with `access(2)` semantics.
//!
//! On Unix the check is made by the kernel for the real user, so ACLs and
//! root's overrides are honored. Elsewhere it degrades to existence plus the
//! read-only attribute.

use std::ops::BitOr;
use std::path::Path;

/// A set of requested permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access(u8);

impl Access {
    pub const READ: Access = Access(0b100);
    pub const WRITE: Access = Access(0b010);
    pub const EXECUTE: Access = Access(0b001);

    /// Read, write and traverse, as required of a log directory.
    pub const ALL: Access = Access(0b111);

    pub fn contains(self, other: Access) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Access {
    type Output = Access;

    fn bitor(self, rhs: Access) -> Access {
        Access(self.0 | rhs.0)
    }
}

/// True when the current user has every permission in `access` on `path`.
#[cfg(unix)]
#[must_use]
pub fn has_access(path: &Path, access: Access) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    let mut mode = 0;
    if access.contains(Access::READ) {
        mode |= libc::R_OK;
    }
    if access.contains(Access::WRITE) {
        mode |= libc::W_OK;
    }
    if access.contains(Access::EXECUTE) {
        mode |= libc::X_OK;
    }

    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn has_access(path: &Path, access: Access) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => !(access.contains(Access::WRITE) && meta.permissions().readonly()),
        Err(_) => false,
    }
}
