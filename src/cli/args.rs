//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::fs::DirectoryKind;

/// Filesystem helper CLI.
#[derive(Parser, Debug)]
#[command(
    name = "easyfs",
    version,
    about = "Query well-known directories, generate file paths, hash data and check permissions",
    long_about = "A small filesystem utility.\n\n\
                  Resolves the document, caches and bundle directories for an application, \
                  creates directories, generates unique file names, computes MD5 digests and \
                  reports read/write access for paths."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "easyfs.toml", global = true)]
    pub config: PathBuf,

    /// Override the document directory.
    #[arg(long = "document-dir", env = "EASYFS_DOCUMENT_DIR", global = true)]
    pub document_dir: Option<PathBuf>,

    /// Override the caches directory.
    #[arg(long = "caches-dir", env = "EASYFS_CACHES_DIR", global = true)]
    pub caches_dir: Option<PathBuf>,

    /// Override the bundle directory.
    #[arg(long = "bundle-dir", env = "EASYFS_BUNDLE_DIR", global = true)]
    pub bundle_dir: Option<PathBuf>,

    /// Print machine-readable JSON where supported.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print one or all well-known directories.
    Dirs {
        /// Directory to print (all when omitted).
        #[arg(value_enum)]
        kind: Option<DirectoryKindArg>,

        /// Print file:// URIs instead of plain paths.
        #[arg(long)]
        uri: bool,

        /// Create the document and caches directories first.
        #[arg(long)]
        prepare: bool,
    },

    /// Create directories (and missing parents) if they do not exist.
    EnsureDir {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Generate unique file paths inside a directory.
    GenPath {
        /// Directory the generated names belong to.
        directory: String,

        /// File extension (no dot is added when empty).
        #[arg(short, long, default_value = "")]
        ext: String,

        /// Number of paths to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Fail if the directory does not exist.
        #[arg(long)]
        require_dir: bool,
    },

    /// Compute the MD5 digest of a file, a string, or stdin.
    Md5 {
        /// File to hash (stdin when omitted).
        file: Option<PathBuf>,

        /// Hash this text instead of a file.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Fail unless the digest equals this value.
        #[arg(long)]
        expect: Option<String>,
    },

    /// Report read/write access for paths.
    Perms {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

/// CLI directory kind argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectoryKindArg {
    /// Persistent user documents.
    Document,
    /// Purgeable cache data.
    Caches,
    /// Read-only bundled resources.
    Bundle,
}

impl From<DirectoryKindArg> for DirectoryKind {
    fn from(arg: DirectoryKindArg) -> Self {
        match arg {
            DirectoryKindArg::Document => DirectoryKind::Document,
            DirectoryKindArg::Caches => DirectoryKind::Caches,
            DirectoryKindArg::Bundle => DirectoryKind::Bundle,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        let overrides = [
            (DirectoryKind::Document, &self.document_dir),
            (DirectoryKind::Caches, &self.caches_dir),
            (DirectoryKind::Bundle, &self.bundle_dir),
        ];

        for (kind, path) in overrides {
            if let Some(path) = path {
                config.set_override(kind, Some(path.clone()));
            }
        }
    }
}
