//! Home directory lookup for `~name` paths.

use std::path::PathBuf;

/// Largest buffer handed to `getpwnam_r` before giving up on a record.
#[cfg(unix)]
const MAX_PASSWD_BUFFER: usize = 1 << 20;

/// Home directory of `user` from the password database, or `None` when the
/// user is unknown.
#[cfg(unix)]
#[must_use]
pub fn home_dir_of(user: &str) -> Option<PathBuf> {
    use std::ffi::{CStr, CString, OsStr};
    use std::os::unix::ffi::OsStrExt;

    let name = CString::new(user).ok()?;
    let mut buf_len = 1024;

    loop {
        let mut buf: Vec<libc::c_char> = vec![0; buf_len];
        // SAFETY: passwd is plain old data; getpwnam_r fills it in.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        // SAFETY: every pointer is valid for the duration of the call and
        // buf.len() is the real capacity of buf.
        let rc = unsafe { libc::getpwnam_r(name.as_ptr(), &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result) };

        if rc == libc::ERANGE && buf_len < MAX_PASSWD_BUFFER {
            buf_len *= 2;
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_dir.is_null() {
            return None;
        }

        // SAFETY: pw_dir points into buf, which is still alive.
        let dir = unsafe { CStr::from_ptr(pwd.pw_dir) };
        return Some(PathBuf::from(OsStr::from_bytes(dir.to_bytes())));
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn home_dir_of(_user: &str) -> Option<PathBuf> {
    None
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn root_has_a_home() {
        let home = home_dir_of("root").expect("root is in the password database");
        assert!(home.is_absolute());
    }

    #[test]
    fn unknown_user_has_no_home() {
        assert_eq!(home_dir_of("no-such-user-scr-test"), None);
        assert_eq!(home_dir_of("bad\0name"), None);
    }
}
