//! Easy FileSystem - well-known directories, file naming, digests and permissions.
//!
//! # Features
//!
//! - Resolve the document, caches and bundle directories of an application
//! - Create directories idempotently
//! - Generate unique file paths inside a directory
//! - MD5 fingerprints of buffers, readers and files
//! - Point-in-time read/write permission queries
//!
//! # Example
//!
//! ```no_run
//! use easy_filesystem::{digest, generate_path, query_permissions, DirectoryKind, PathProvider};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = PathProvider::default();
//!     let caches = provider.resolve_directory(DirectoryKind::Caches)?;
//!
//!     let target = generate_path(&caches.to_string_lossy(), "png");
//!     println!("{} -> {}", target, query_permissions(&caches));
//!     println!("{}", digest(b"abc"));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod hash;
pub mod output;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use fs::{
    check_parent_dir_exists, ensure_directory_exists, generate_path, query_permissions,
    DirectoryKind, GeneratedPath, PathProvider, PermissionFlags,
};
pub use hash::{digest, digest_file, digest_reader};
