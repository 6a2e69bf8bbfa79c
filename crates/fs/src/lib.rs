mod access;
mod checksum;
pub mod identity;
mod mode;
mod probe;
mod record;

pub use access::EffectiveAccess;
pub use checksum::{ChecksumAlgorithm, UnknownAlgorithm, digest_file, digest_reader};
pub use identity::UserEntry;
pub use mode::{ModeBits, Permissions};
pub use probe::{FileStatusProbe, ProbeOptions};
pub use record::{FileStatus, StatusRecord};
