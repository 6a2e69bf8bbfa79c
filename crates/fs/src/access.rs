use std::{ffi::CString, os::unix::ffi::OsStrExt, path::Path};

/// What the calling process may do with a path, according to the kernel.
///
/// Unlike the mode bits this accounts for the process identity, ACLs and
/// mount options such as `ro` or `noexec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectiveAccess {
    pub readable: bool,
    pub writable: bool,
    pub executable: bool,
}

impl EffectiveAccess {
    pub fn check(path: &Path) -> Self {
        let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
            return Self::default();
        };

        let allowed = |mode| unsafe { libc::access(c_path.as_ptr(), mode) == 0 };

        Self {
            readable: allowed(libc::R_OK),
            writable: allowed(libc::W_OK),
            executable: allowed(libc::X_OK),
        }
    }
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
