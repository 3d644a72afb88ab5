//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use crate::fs::DirectoryKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub directories: DirectoriesConfig,
}

/// Application identity used to locate the per-application directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reverse-domain qualifier (e.g. "com").
    #[serde(default = "default_qualifier")]
    pub qualifier: String,

    /// Organization name.
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Application name.
    #[serde(default = "default_application")]
    pub application: String,
}

/// Explicit directory overrides. Unset entries fall back to the OS location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoriesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caches: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            qualifier: default_qualifier(),
            organization: default_organization(),
            application: default_application(),
        }
    }
}

fn default_qualifier() -> String {
    "com".to_string()
}

fn default_organization() -> String {
    "EasyFileSystem".to_string()
}

fn default_application() -> String {
    "easyfs".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the configured override for a directory kind, if any.
    pub fn override_for(&self, kind: DirectoryKind) -> Option<&Path> {
        match kind {
            DirectoryKind::Document => self.directories.document.as_deref(),
            DirectoryKind::Caches => self.directories.caches.as_deref(),
            DirectoryKind::Bundle => self.directories.bundle.as_deref(),
        }
    }

    /// Set or clear the override for a directory kind.
    pub fn set_override(&mut self, kind: DirectoryKind, path: Option<PathBuf>) {
        let slot = match kind {
            DirectoryKind::Document => &mut self.directories.document,
            DirectoryKind::Caches => &mut self.directories.caches,
            DirectoryKind::Bundle => &mut self.directories.bundle,
        };
        *slot = path;
    }
}
