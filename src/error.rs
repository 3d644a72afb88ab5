//! Error types for the easy-filesystem crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::fs::DirectoryKind;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // Directory resolution errors
    #[error("No '{0}' directory is available on this platform")]
    UnsupportedDirectoryKind(DirectoryKind),

    // File system errors
    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Directory for {} doesn't exist", .0.display())]
    MissingParentDirectory(PathBuf),

    // Digest errors
    #[error("Not a 32-character hex MD5 digest: {0}")]
    InvalidDigest(String),

    #[error("MD5 mismatch: expected {expected}, got {actual}")]
    DigestMismatch { expected: String, actual: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes for the `easyfs` binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
    pub const UNSUPPORTED: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
    pub const DIGEST_MISMATCH: i32 = 7;
}
