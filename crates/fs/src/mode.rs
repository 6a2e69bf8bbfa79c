use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// The twelve POSIX permission bits of `st_mode`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModeBits: u32 {
        const SETUID      = 0o4000;
        const SETGID      = 0o2000;
        const STICKY      = 0o1000;
        const OWNER_READ  = 0o0400;
        const OWNER_WRITE = 0o0200;
        const OWNER_EXEC  = 0o0100;
        const GROUP_READ  = 0o0040;
        const GROUP_WRITE = 0o0020;
        const GROUP_EXEC  = 0o0010;
        const OTHER_READ  = 0o0004;
        const OTHER_WRITE = 0o0002;
        const OTHER_EXEC  = 0o0001;
    }
}

impl ModeBits {
    /// Keep the permission bits of a raw `st_mode`, dropping the file type.
    pub fn from_raw_mode(st_mode: u32) -> Self {
        Self::from_bits_truncate(st_mode)
    }

    /// The bits written in octal and read back as a decimal number,
    /// so `0o755` becomes `755` and `0o4750` becomes `4750`.
    pub fn octal_digits(self) -> u32 {
        let mut bits = self.bits();
        let mut value = 0;
        let mut place = 1;

        while bits != 0 {
            value += (bits & 0o7) * place;
            bits >>= 3;
            place *= 10;
        }

        value
    }
}

/// Named view of [`ModeBits`], one flag per bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Permissions {
    pub owner_readable: bool,
    pub owner_writable: bool,
    pub owner_executable: bool,
    pub group_readable: bool,
    pub group_writable: bool,
    pub group_executable: bool,
    pub other_readable: bool,
    pub other_writable: bool,
    pub other_executable: bool,
    pub sticky: bool,
    pub setuid: bool,
    pub setgid: bool,
}

impl From<ModeBits> for Permissions {
    fn from(bits: ModeBits) -> Self {
        Self {
            owner_readable: bits.contains(ModeBits::OWNER_READ),
            owner_writable: bits.contains(ModeBits::OWNER_WRITE),
            owner_executable: bits.contains(ModeBits::OWNER_EXEC),
            group_readable: bits.contains(ModeBits::GROUP_READ),
            group_writable: bits.contains(ModeBits::GROUP_WRITE),
            group_executable: bits.contains(ModeBits::GROUP_EXEC),
            other_readable: bits.contains(ModeBits::OTHER_READ),
            other_writable: bits.contains(ModeBits::OTHER_WRITE),
            other_executable: bits.contains(ModeBits::OTHER_EXEC),
            sticky: bits.contains(ModeBits::STICKY),
            setuid: bits.contains(ModeBits::SETUID),
            setgid: bits.contains(ModeBits::SETGID),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
