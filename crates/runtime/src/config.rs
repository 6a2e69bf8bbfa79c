pub const PROGRAM_NAME: &str = "statprobe";
pub const PROGRAM_LOG_LEVEL: &str = "STATPROBE_LOG_LEVEL";
/// Overrides the checksum algorithm the CLI uses when `--algorithm` is absent.
pub const PROGRAM_CHECKSUM_ALGORITHM: &str = "STATPROBE_CHECKSUM_ALGORITHM";

/// Read size used when streaming a file through a digest.
pub const CHECKSUM_CHUNK_SIZE: usize = 4096;

pub const DEFAULT_CHECKSUM_ALGORITHM: &str = "sha1";

/// Default decoration for the `surround` filter.
pub const DEFAULT_SURROUND: &str = "xXx";

/// Log target used by the probe diagnostics.
pub const PROBE_LOG_TARGET: &str = "statprobe::probe";

/// Checksum algorithm name from the environment, or the built-in default.
pub fn default_checksum_algorithm() -> String {
    std::env::var(PROGRAM_CHECKSUM_ALGORITHM)
        .ok()
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_CHECKSUM_ALGORITHM.to_owned())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
