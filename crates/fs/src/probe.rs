use std::{
    fs::{self, Metadata},
    io,
    os::unix::fs::MetadataExt,
    path::Path,
};

use chrono::{DateTime, Local};
use serde::Deserialize;
use statprobe_runtime::{Diagnostics, LogDiagnostics};

use crate::{
    access::EffectiveAccess,
    checksum::{ChecksumAlgorithm, digest_file},
    identity,
    mode::{ModeBits, Permissions},
    record::{FileStatus, StatusRecord},
};

/// `ctime(3)` layout: `Thu Sep  9 01:46:40 2001`
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Named options accepted by a batch probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ProbeOptions {
    /// Inspect the target of a symlink instead of the link itself
    pub follow: bool,
    pub get_checksum: bool,
    pub checksum_algorithm: ChecksumAlgorithm,
}

/// Inspects filesystem metadata, one path at a time.
///
/// Holds no state besides its diagnostics sink; every call is independent.
pub struct FileStatusProbe<D = LogDiagnostics> {
    diag: D,
}

impl FileStatusProbe<LogDiagnostics> {
    /// Probe reporting through the `log` facade.
    pub fn logging() -> Self {
        Self::new(LogDiagnostics::default())
    }
}

impl Default for FileStatusProbe<LogDiagnostics> {
    fn default() -> Self {
        Self::logging()
    }
}

impl<D: Diagnostics> FileStatusProbe<D> {
    pub fn new(diag: D) -> Self {
        Self { diag }
    }

    /// Status of `path`. A missing path is `Ok` with `exists == false`;
    /// every other metadata error is returned as is.
    pub fn probe(&self, path: &Path, follow_symlinks: bool) -> io::Result<StatusRecord> {
        if path.as_os_str().is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty path"));
        }

        let metadata = if follow_symlinks {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        };

        let metadata = match metadata {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.diag
                    .debug(&format!("[probe] {}: does not exist", path.display()));
                return Ok(StatusRecord::missing());
            }
            Err(e) => return Err(e),
        };

        self.diag.debug(&format!(
            "[probe] {}: follow={follow_symlinks}",
            path.display()
        ));

        Ok(StatusRecord::found(inspect(path, &metadata)))
    }

    /// Hex digest of the file at `path`, or `None` if it cannot be read.
    pub fn compute_checksum(&self, path: &Path, algorithm: ChecksumAlgorithm) -> Option<String> {
        match digest_file(path, algorithm) {
            Ok(digest) => Some(digest),
            Err(e) => {
                self.diag.debug(&format!(
                    "[checksum] {} ({algorithm}) failed: {e}",
                    path.display()
                ));
                None
            }
        }
    }

    /// [`probe`](Self::probe), plus a checksum when requested and the path exists.
    pub fn probe_with(&self, path: &Path, options: &ProbeOptions) -> io::Result<StatusRecord> {
        let mut record = self.probe(path, options.follow)?;

        if options.get_checksum
            && let Some(status) = record.status.as_mut()
        {
            status.checksum = self.compute_checksum(path, options.checksum_algorithm);
        }

        Ok(record)
    }

    /// Probe every path in order. The output is aligned with `paths`; a
    /// failing path does not stop the ones after it.
    pub fn probe_all<P: AsRef<Path>>(
        &self,
        paths: &[P],
        options: &ProbeOptions,
    ) -> Vec<io::Result<StatusRecord>> {
        paths
            .iter()
            .map(|p| {
                let path = p.as_ref();
                let result = self.probe_with(path, options);
                if let Err(e) = &result {
                    self.diag
                        .warn(&format!("[probe] {} failed: {e}", path.display()));
                }
                result
            })
            .collect()
    }
}

fn inspect(path: &Path, metadata: &Metadata) -> FileStatus {
    let bits = ModeBits::from_raw_mode(metadata.mode());
    let access = EffectiveAccess::check(path);
    let file_type = metadata.file_type();

    FileStatus {
        size: metadata.size(),
        owner_id: metadata.uid(),
        group_id: metadata.gid(),
        owner_name: identity::owner_name(metadata.uid()),
        group_name: identity::group_name(metadata.gid()),
        mode: bits.octal_digits(),
        permissions: Permissions::from(bits),
        access_time: epoch_secs(metadata.atime(), metadata.atime_nsec()),
        modify_time: epoch_secs(metadata.mtime(), metadata.mtime_nsec()),
        change_time: epoch_secs(metadata.ctime(), metadata.ctime_nsec()),
        last_modified_display: ctime_display(metadata.mtime(), metadata.mtime_nsec()),
        is_directory: file_type.is_dir(),
        is_regular_file: file_type.is_file(),
        is_symlink: file_type.is_symlink(),
        is_readable: access.readable,
        is_writable: access.writable,
        is_executable: access.executable,
        link_count: metadata.nlink(),
        checksum: None,
    }
}

fn epoch_secs(secs: i64, nsecs: i64) -> f64 {
    secs as f64 + nsecs as f64 / 1e9
}

fn ctime_display(secs: i64, nsecs: i64) -> String {
    let nsecs = nsecs.clamp(0, 999_999_999) as u32;
    match DateTime::from_timestamp(secs, nsecs) {
        Some(utc) => utc.with_timezone(&Local).format(CTIME_FORMAT).to_string(),
        None => secs.to_string(),
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
