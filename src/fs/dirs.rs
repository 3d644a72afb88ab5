//! Well-known directory resolution and directory management.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Well-known per-application root directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryKind {
    /// User documents area, persistent and writable.
    Document,
    /// Cache area, writable and may be purged by the OS.
    Caches,
    /// Read-only bundled resources shipped next to the executable.
    Bundle,
}

impl DirectoryKind {
    /// All directory kinds, in display order.
    pub const ALL: [DirectoryKind; 3] = [
        DirectoryKind::Document,
        DirectoryKind::Caches,
        DirectoryKind::Bundle,
    ];

    /// Whether the application owns (and may create) this root.
    pub fn is_writable_root(&self) -> bool {
        !matches!(self, DirectoryKind::Bundle)
    }
}

impl fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryKind::Document => write!(f, "document"),
            DirectoryKind::Caches => write!(f, "caches"),
            DirectoryKind::Bundle => write!(f, "bundle"),
        }
    }
}

impl FromStr for DirectoryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" | "documents" => Ok(DirectoryKind::Document),
            "caches" | "cache" => Ok(DirectoryKind::Caches),
            "bundle" => Ok(DirectoryKind::Bundle),
            _ => Err(format!("Unknown directory kind: {}", s)),
        }
    }
}

/// Resolves well-known directories for one application identity.
///
/// Holds only the configured identity and overrides; every call asks the OS
/// again, so a provider can be created per call or shared freely.
#[derive(Debug, Clone, Default)]
pub struct PathProvider {
    config: Config,
}

impl PathProvider {
    /// Create a provider from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Resolve the absolute path of a well-known directory.
    ///
    /// Writable roots (document, caches) are created if missing. The bundle
    /// directory is never created; if it does not exist the kind is reported
    /// as unsupported.
    pub fn resolve_directory(&self, kind: DirectoryKind) -> Result<PathBuf> {
        let path = match self.config.override_for(kind) {
            Some(path) if !path.is_absolute() => {
                return Err(Error::ConfigValidation {
                    field: format!("directories.{}", kind),
                    message: format!("Path must be absolute (got '{}')", path.display()),
                });
            }
            Some(path) => path.to_path_buf(),
            None => self.os_directory(kind)?,
        };

        if kind.is_writable_root() {
            ensure_directory_exists(&path)?;
        } else if !path.is_dir() {
            tracing::debug!("{} directory {} does not exist", kind, path.display());
            return Err(Error::UnsupportedDirectoryKind(kind));
        }

        tracing::debug!("Resolved {} directory: {}", kind, path.display());
        Ok(path)
    }

    /// Resolve a directory as a `file://` URI with a trailing slash.
    pub fn directory_uri(&self, kind: DirectoryKind) -> Result<String> {
        let path = self.resolve_directory(kind)?;
        let url = Url::from_directory_path(&path).map_err(|_| {
            Error::Config(format!(
                "{} directory '{}' cannot be expressed as a file URI",
                kind,
                path.display()
            ))
        })?;
        Ok(url.to_string())
    }

    /// Ensure both writable roots exist, returning their paths.
    pub fn prepare_roots(&self) -> Result<Vec<(DirectoryKind, PathBuf)>> {
        DirectoryKind::ALL
            .into_iter()
            .filter(DirectoryKind::is_writable_root)
            .map(|kind| Ok((kind, self.resolve_directory(kind)?)))
            .collect()
    }

    /// Location the OS assigns to a directory kind, without touching the disk.
    fn os_directory(&self, kind: DirectoryKind) -> Result<PathBuf> {
        match kind {
            DirectoryKind::Bundle => {
                bundle_directory().ok_or(Error::UnsupportedDirectoryKind(kind))
            }
            DirectoryKind::Document | DirectoryKind::Caches => {
                let app = &self.config.app;
                let dirs = ProjectDirs::from(&app.qualifier, &app.organization, &app.application)
                    .ok_or(Error::UnsupportedDirectoryKind(kind))?;

                let path = match kind {
                    DirectoryKind::Document => dirs.data_dir(),
                    _ => dirs.cache_dir(),
                };
                Ok(path.to_path_buf())
            }
        }
    }
}

/// Directory containing the running executable.
fn bundle_directory() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Ensure a directory exists, creating it and any missing parents.
///
/// Returns whether the directory exists after the call. A non-directory
/// already occupying the path is reported as [`Error::NotADirectory`].
pub fn ensure_directory_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();

    if path.is_dir() {
        return Ok(true);
    }

    // symlink_metadata also catches dangling links
    if std::fs::symlink_metadata(path).is_ok() {
        tracing::warn!("Cannot create directory, path is occupied: {}", path.display());
        return Err(Error::NotADirectory(path.to_path_buf()));
    }

    tracing::debug!("Creating directory {}", path.display());
    std::fs::create_dir_all(path)?;

    Ok(path.is_dir())
}

/// Check that the directory which would contain `path` exists.
pub fn check_parent_dir_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    match path.parent() {
        // Bare file names and roots live in an existing directory.
        None => Ok(()),
        Some(parent) if parent.as_os_str().is_empty() => Ok(()),
        Some(parent) if parent.is_dir() => Ok(()),
        Some(_) => Err(Error::MissingParentDirectory(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn provider_in(dir: &Path) -> PathProvider {
        let mut config = Config::default();
        config.set_override(DirectoryKind::Document, Some(dir.join("Documents")));
        config.set_override(DirectoryKind::Caches, Some(dir.join("Caches")));
        config.set_override(DirectoryKind::Bundle, Some(dir.to_path_buf()));
        PathProvider::new(&config)
    }

    #[test]
    fn test_directory_kind_parse_and_display() {
        for kind in DirectoryKind::ALL {
            assert_eq!(kind.to_string().parse::<DirectoryKind>().unwrap(), kind);
        }
        assert_eq!("Cache".parse::<DirectoryKind>().unwrap(), DirectoryKind::Caches);
        assert!("temp".parse::<DirectoryKind>().is_err());
    }

    #[test]
    fn test_resolve_all_kinds_exist() {
        let dir = TempDir::new().unwrap();
        let provider = provider_in(dir.path());

        for kind in DirectoryKind::ALL {
            let path = provider.resolve_directory(kind).unwrap();
            assert!(!path.as_os_str().is_empty());
            assert!(path.is_absolute());
            assert!(path.is_dir());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_os_locations_without_overrides() {
        let home = TempDir::new().unwrap();
        std::env::set_var("HOME", home.path());
        std::env::remove_var("XDG_DATA_HOME");
        std::env::remove_var("XDG_CACHE_HOME");

        let provider = PathProvider::default();
        for kind in [DirectoryKind::Document, DirectoryKind::Caches] {
            let path = provider.resolve_directory(kind).unwrap();
            assert!(path.is_absolute());
            assert!(path.is_dir());
            assert!(path.starts_with(home.path()));
        }

        let document = provider.resolve_directory(DirectoryKind::Document).unwrap();
        let caches = provider.resolve_directory(DirectoryKind::Caches).unwrap();
        assert_ne!(document, caches);
    }

    #[test]
    fn test_default_bundle_is_executable_dir() {
        let path = PathProvider::default()
            .resolve_directory(DirectoryKind::Bundle)
            .unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(path.as_path()), exe.parent());
    }

    #[test]
    fn test_missing_bundle_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set_override(DirectoryKind::Bundle, Some(dir.path().join("absent")));

        let result = PathProvider::new(&config).resolve_directory(DirectoryKind::Bundle);
        assert!(matches!(
            result,
            Err(Error::UnsupportedDirectoryKind(DirectoryKind::Bundle))
        ));
        assert!(!dir.path().join("absent").exists());
    }

    #[test]
    fn test_relative_override_rejected() {
        let mut config = Config::default();
        config.set_override(DirectoryKind::Document, Some(PathBuf::from("docs")));

        let result = PathProvider::new(&config).resolve_directory(DirectoryKind::Document);
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_directory_uri() {
        let dir = TempDir::new().unwrap();
        let provider = provider_in(dir.path());

        let uri = provider.directory_uri(DirectoryKind::Caches).unwrap();
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("/Caches/"));
    }

    #[test]
    fn test_prepare_roots() {
        let dir = TempDir::new().unwrap();
        let roots = provider_in(dir.path()).prepare_roots().unwrap();

        let kinds: Vec<_> = roots.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, vec![DirectoryKind::Document, DirectoryKind::Caches]);
        assert!(dir.path().join("Documents").is_dir());
        assert!(dir.path().join("Caches").is_dir());
    }

    #[test]
    fn test_ensure_directory_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("data");

        assert!(ensure_directory_exists(&target).unwrap());
        assert!(ensure_directory_exists(&target).unwrap());
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_directory_nested() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a").join("b").join("c");

        assert!(ensure_directory_exists(&target).unwrap());
        assert!(dir.path().join("a").is_dir());
        assert!(dir.path().join("a").join("b").is_dir());
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_directory_conflict() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();

        match ensure_directory_exists(&file) {
            Err(Error::NotADirectory(path)) => assert_eq!(path, file),
            other => panic!("expected NotADirectory, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_directory_dangling_symlink_conflict() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();

        match ensure_directory_exists(&link) {
            Err(Error::NotADirectory(path)) => assert_eq!(path, link),
            other => panic!("expected NotADirectory, got {:?}", other),
        }
        assert!(!dir.path().join("nowhere").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_directory_symlink_to_dir() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real");
        std::fs::create_dir(&target).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(ensure_directory_exists(&link).unwrap());
    }

    #[test]
    fn test_ensure_directory_under_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();

        assert!(ensure_directory_exists(file.join("child")).is_err());
    }

    #[test]
    fn test_check_parent_dir_exists() {
        let dir = TempDir::new().unwrap();

        assert!(check_parent_dir_exists(dir.path().join("file.bin")).is_ok());
        assert!(check_parent_dir_exists("file.bin").is_ok());
        assert!(matches!(
            check_parent_dir_exists(dir.path().join("missing").join("file.bin")),
            Err(Error::MissingParentDirectory(_))
        ));
    }
}
