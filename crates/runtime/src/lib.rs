mod config;
pub mod diagnostics;
pub mod logging;

pub use config::{
    CHECKSUM_CHUNK_SIZE, DEFAULT_CHECKSUM_ALGORITHM, DEFAULT_SURROUND, PROBE_LOG_TARGET,
    PROGRAM_CHECKSUM_ALGORITHM, PROGRAM_LOG_LEVEL, PROGRAM_NAME, default_checksum_algorithm,
};
pub use diagnostics::{BufferedDiagnostics, Diagnostics, LogDiagnostics, NullDiagnostics};

pub use logging::init;
