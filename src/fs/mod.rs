//! Filesystem module.
//!
//! Provides:
//! - Well-known directory resolution and directory management
//! - Unique file path generation
//! - Read/write permission queries

pub mod dirs;
pub mod naming;
pub mod permissions;

pub use dirs::{check_parent_dir_exists, ensure_directory_exists, DirectoryKind, PathProvider};
pub use naming::{generate_path, normalize_extension, GeneratedPath};
pub use permissions::{query_permissions, PermissionFlags};
