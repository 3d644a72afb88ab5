//! Hashing module.
//!
//! Provides MD5 content fingerprints for buffers, readers and files.

pub mod fingerprint;

pub use fingerprint::{digest, digest_file, digest_reader, is_md5_hex, DIGEST_HEX_LEN};
