//! Lookups against the system user and group databases.

use std::{
    ffi::{CStr, CString},
    io,
    mem::MaybeUninit,
    ptr,
    sync::Mutex,
};

use libc::{c_char, c_int, size_t};
use serde::Serialize;

const INITIAL_BUF_LEN: usize = 1024;
const MAX_BUF_LEN: usize = 1 << 20;

/// Serializes `setpwent`/`getpwent`/`endpwent`, which share one cursor per process.
static PWENT_LOCK: Mutex<()> = Mutex::new(());

/// One entry of the password database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserEntry {
    pub pw_name: String,
    pub pw_passwd: String,
    pub pw_uid: u32,
    pub pw_gid: u32,
    pub pw_gecos: String,
    pub pw_dir: String,
    pub pw_shell: String,
}

impl UserEntry {
    /// # Safety
    /// Every string pointer in `pw` must be null or point to a valid C string.
    unsafe fn from_raw(pw: &libc::passwd) -> Self {
        unsafe {
            Self {
                pw_name: lossy(pw.pw_name),
                pw_passwd: lossy(pw.pw_passwd),
                pw_uid: pw.pw_uid,
                pw_gid: pw.pw_gid,
                pw_gecos: lossy(pw.pw_gecos),
                pw_dir: lossy(pw.pw_dir),
                pw_shell: lossy(pw.pw_shell),
            }
        }
    }
}

/// # Safety
/// `p` must be null or point to a valid C string.
unsafe fn lossy(p: *const c_char) -> String {
    if p.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned()
}

/// Drive one of the reentrant `get*_r` calls, growing the scratch buffer on `ERANGE`.
fn lookup_r<T, R>(
    mut call: impl FnMut(*mut T, *mut c_char, size_t, *mut *mut T) -> c_int,
    convert: impl FnOnce(&T) -> R,
) -> io::Result<Option<R>> {
    let mut buf_len = INITIAL_BUF_LEN;

    loop {
        let mut entry = MaybeUninit::<T>::uninit();
        let mut buf: Vec<c_char> = vec![0; buf_len];
        let mut result: *mut T = ptr::null_mut();

        let rc = call(entry.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &mut result);

        match rc {
            0 if result.is_null() => return Ok(None),
            // `result` points at `entry`, whose strings live in `buf`; both outlive `convert`.
            0 => return Ok(Some(convert(unsafe { &*result }))),
            libc::ERANGE if buf_len < MAX_BUF_LEN => buf_len *= 2,
            // POSIX allows these for "no such entry".
            libc::ENOENT | libc::ESRCH | libc::EBADF | libc::EPERM => return Ok(None),
            errno => return Err(io::Error::from_raw_os_error(errno)),
        }
    }
}

pub fn user_by_uid(uid: u32) -> io::Result<Option<UserEntry>> {
    lookup_r(
        |pwd, buf, len, result| unsafe { libc::getpwuid_r(uid, pwd, buf, len, result) },
        |pw: &libc::passwd| unsafe { UserEntry::from_raw(pw) },
    )
}

pub fn user_by_name(name: &str) -> io::Result<Option<UserEntry>> {
    let Ok(c_name) = CString::new(name) else {
        return Ok(None);
    };

    lookup_r(
        |pwd, buf, len, result| unsafe {
            libc::getpwnam_r(c_name.as_ptr(), pwd, buf, len, result)
        },
        |pw: &libc::passwd| unsafe { UserEntry::from_raw(pw) },
    )
}

pub fn group_by_gid(gid: u32) -> io::Result<Option<String>> {
    lookup_r(
        |grp, buf, len, result| unsafe { libc::getgrgid_r(gid, grp, buf, len, result) },
        |gr: &libc::group| unsafe { lossy(gr.gr_name) },
    )
}

/// Login name for `uid`, or the uid in decimal when it cannot be resolved.
pub fn owner_name(uid: u32) -> String {
    match user_by_uid(uid) {
        Ok(Some(user)) => user.pw_name,
        _ => uid.to_string(),
    }
}

/// Group name for `gid`, or the gid in decimal when it cannot be resolved.
pub fn group_name(gid: u32) -> String {
    match group_by_gid(gid) {
        Ok(Some(name)) => name,
        _ => gid.to_string(),
    }
}

/// Every entry of the password database, in database order.
pub fn all_users() -> Vec<UserEntry> {
    let _guard = PWENT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut users = Vec::new();

    unsafe {
        libc::setpwent();
        loop {
            let pw = libc::getpwent();
            if pw.is_null() {
                break;
            }
            users.push(UserEntry::from_raw(&*pw));
        }
        libc::endpwent();
    }

    users
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
