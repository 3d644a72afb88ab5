//! Point-in-time read/write permission queries.
//!
//! The result is a snapshot: access may change between the query and any
//! later I/O, so a positive answer is only a hint and the actual operation
//! must still handle failure.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::path::Path;

use serde::{Serialize, Serializer};

/// Read/write capability bitset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PermissionFlags(u32);

impl PermissionFlags {
    pub const NONE: PermissionFlags = PermissionFlags(0);
    pub const READ: PermissionFlags = PermissionFlags(1 << 1);
    pub const WRITE: PermissionFlags = PermissionFlags(1 << 2);

    const ALL_BITS: u32 = Self::READ.0 | Self::WRITE.0;

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Build flags from raw bits, dropping unknown ones.
    pub fn from_bits_truncate(bits: u32) -> Self {
        PermissionFlags(bits & Self::ALL_BITS)
    }

    pub fn contains(&self, other: PermissionFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    pub fn can_read(&self) -> bool {
        self.contains(Self::READ)
    }

    pub fn can_write(&self) -> bool {
        self.contains(Self::WRITE)
    }
}

impl BitOr for PermissionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        PermissionFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for PermissionFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PermissionFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        PermissionFlags(self.0 & rhs.0)
    }
}

impl fmt::Display for PermissionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let read = if self.can_read() { 'r' } else { '-' };
        let write = if self.can_write() { 'w' } else { '-' };
        write!(f, "{}{}", read, write)
    }
}

impl Serialize for PermissionFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("PermissionFlags", 2)?;
        state.serialize_field("read", &self.can_read())?;
        state.serialize_field("write", &self.can_write())?;
        state.end()
    }
}

/// Report whether the current process can read and/or write `path`.
///
/// Never fails: a missing path, or one with no access, yields
/// [`PermissionFlags::NONE`].
pub fn query_permissions(path: impl AsRef<Path>) -> PermissionFlags {
    let path = path.as_ref();
    let flags = platform::query(path);
    tracing::debug!("Permissions for {}: {}", path.display(), flags);
    flags
}

#[cfg(unix)]
mod platform {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    use super::PermissionFlags;

    /// Uses `access(2)`: real uid/gid, symbolic links followed.
    pub(super) fn query(path: &Path) -> PermissionFlags {
        let c_path = match CString::new(path.as_os_str().as_bytes()) {
            Ok(c_path) => c_path,
            Err(_) => return PermissionFlags::NONE,
        };

        let mut flags = PermissionFlags::NONE;
        // SAFETY: `c_path` is a valid NUL-terminated string for the duration of both calls.
        if unsafe { libc::access(c_path.as_ptr(), libc::R_OK) } == 0 {
            flags |= PermissionFlags::READ;
        }
        if unsafe { libc::access(c_path.as_ptr(), libc::W_OK) } == 0 {
            flags |= PermissionFlags::WRITE;
        }
        flags
    }
}

#[cfg(not(unix))]
mod platform {
    use std::path::Path;

    use super::PermissionFlags;

    pub(super) fn query(path: &Path) -> PermissionFlags {
        match std::fs::metadata(path) {
            Ok(metadata) if metadata.permissions().readonly() => PermissionFlags::READ,
            Ok(_) => PermissionFlags::READ | PermissionFlags::WRITE,
            Err(_) => PermissionFlags::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flag_values() {
        assert_eq!(PermissionFlags::NONE.bits(), 0);
        assert_eq!(PermissionFlags::READ.bits(), 2);
        assert_eq!(PermissionFlags::WRITE.bits(), 4);
        assert_eq!(PermissionFlags::from_bits_truncate(0xff).bits(), 6);
    }

    #[test]
    fn test_flag_operations() {
        let both = PermissionFlags::READ | PermissionFlags::WRITE;
        assert!(both.contains(PermissionFlags::READ));
        assert!(both.contains(PermissionFlags::WRITE));
        assert_eq!(both & PermissionFlags::WRITE, PermissionFlags::WRITE);
        assert!(PermissionFlags::NONE.is_none());
        assert!(!PermissionFlags::READ.contains(PermissionFlags::WRITE));
    }

    #[test]
    fn test_display() {
        assert_eq!((PermissionFlags::READ | PermissionFlags::WRITE).to_string(), "rw");
        assert_eq!(PermissionFlags::READ.to_string(), "r-");
        assert_eq!(PermissionFlags::WRITE.to_string(), "-w");
        assert_eq!(PermissionFlags::NONE.to_string(), "--");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(PermissionFlags::READ).unwrap();
        assert_eq!(json, serde_json::json!({ "read": true, "write": false }));
    }

    #[test]
    fn test_missing_path_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            query_permissions(dir.path().join("missing.txt")),
            PermissionFlags::NONE
        );
    }

    #[test]
    fn test_owned_file_is_read_write() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("owned.txt");
        std::fs::write(&file, b"data").unwrap();

        assert_eq!(
            query_permissions(&file),
            PermissionFlags::READ | PermissionFlags::WRITE
        );
        assert_eq!(
            query_permissions(dir.path()),
            PermissionFlags::READ | PermissionFlags::WRITE
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_nul_byte_path_is_none() {
        assert_eq!(query_permissions("bad\0path"), PermissionFlags::NONE);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_file() {
        use std::os::unix::fs::PermissionsExt;

        // root bypasses mode bits
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("readonly.txt");
        std::fs::write(&file, b"data").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o444)).unwrap();

        assert_eq!(query_permissions(&file), PermissionFlags::READ);
    }
}
