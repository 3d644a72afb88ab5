//! MD5 content digests.
//!
//! MD5 is used as a content fingerprint for deduplication and change
//! detection. It offers no protection against deliberate collisions.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use md5::{Digest, Md5};

use crate::error::Result;

/// Length of a hex-encoded MD5 digest.
pub const DIGEST_HEX_LEN: usize = 32;

/// Compute the lowercase hex MD5 digest of a byte buffer.
pub fn digest(bytes: impl AsRef<[u8]>) -> String {
    let result = Md5::digest(bytes.as_ref());
    format!("{:x}", result)
}

/// Compute the MD5 digest of everything a reader yields.
///
/// Interrupted reads are retried.
pub fn digest_reader(mut reader: impl Read) -> Result<String> {
    let mut hasher = Md5::new();
    io::copy(&mut reader, &mut hasher)?;

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}

/// Compute the MD5 digest of a file's contents.
pub fn digest_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let hash = digest_reader(file)?;
    tracing::debug!("MD5 of {}: {}", path.display(), hash);
    Ok(hash)
}

/// Check whether a string looks like a lowercase hex MD5 digest.
pub fn is_md5_hex(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
