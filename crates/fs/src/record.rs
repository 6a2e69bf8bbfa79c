use serde::Serialize;

use crate::mode::Permissions;

/// Result of probing one path.
///
/// A missing path serializes as `{"exists": false}` and carries no other fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRecord {
    pub exists: bool,
    #[serde(flatten)]
    pub status: Option<FileStatus>,
}

impl StatusRecord {
    pub fn missing() -> Self {
        Self {
            exists: false,
            status: None,
        }
    }

    pub fn found(status: FileStatus) -> Self {
        Self {
            exists: true,
            status: Some(status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileStatus {
    /// Length in bytes
    pub size: u64,
    pub owner_id: u32,
    pub group_id: u32,
    /// Login name, or the decimal uid when the id has no passwd entry
    pub owner_name: String,
    /// Group name, or the decimal gid when the id has no group entry
    pub group_name: String,
    /// Permission bits as octal digits, e.g. `755`
    pub mode: u32,
    pub permissions: Permissions,
    /// Seconds since the epoch
    pub access_time: f64,
    pub modify_time: f64,
    pub change_time: f64,
    /// `modify_time` in `ctime(3)` layout, local time
    pub last_modified_display: String,
    pub is_directory: bool,
    pub is_regular_file: bool,
    pub is_symlink: bool,
    /// Effective access for the calling process, as reported by `access(2)`
    pub is_readable: bool,
    pub is_writable: bool,
    pub is_executable: bool,
    pub link_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}
