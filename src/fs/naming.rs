//! Unique file path generation.

use std::fmt;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// A freshly generated file path: `<directory>/<token>[.<extension>]`.
///
/// Only the name is produced; the file itself is never created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedPath {
    path: String,
    token: Uuid,
}

impl GeneratedPath {
    /// The random token used as the file stem.
    pub fn token(&self) -> Uuid {
        self.token
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl fmt::Display for GeneratedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<Path> for GeneratedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl From<GeneratedPath> for String {
    fn from(generated: GeneratedPath) -> Self {
        generated.path
    }
}

impl From<GeneratedPath> for PathBuf {
    fn from(generated: GeneratedPath) -> Self {
        PathBuf::from(generated.path)
    }
}

/// Generate a unique file path inside `directory` with the given extension.
///
/// The token is a random v4 UUID. No I/O is performed: the directory is not
/// checked and the filesystem is not consulted for collisions.
pub fn generate_path(directory: &str, extension: &str) -> GeneratedPath {
    let token = Uuid::new_v4();

    let trimmed = directory.trim_end_matches('/');
    let directory = if trimmed.is_empty() && directory.starts_with('/') {
        ""
    } else {
        trimmed
    };

    let path = match normalize_extension(extension) {
        "" => format!("{}/{}", directory, token),
        ext => format!("{}/{}.{}", directory, token, ext),
    };

    GeneratedPath { path, token }
}

/// Strip a single leading dot from an extension (".png" -> "png").
pub fn normalize_extension(extension: &str) -> &str {
    extension.strip_prefix('.').unwrap_or(extension)
}
