//! Subcommand implementations.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fs::{
    check_parent_dir_exists, ensure_directory_exists, generate_path, query_permissions, DirectoryKind, PathProvider,
    PermissionFlags,
};
use crate::hash::{digest, digest_file, digest_reader, is_md5_hex};
use crate::output::{
    create_hash_bar, print_directory, print_info, print_permissions, print_success,
    print_warning,
};

/// Files larger than this show a progress bar while hashing (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// One resolved directory, as printed by `dirs --json`.
#[derive(Debug, Serialize)]
pub struct DirectoryEntry {
    pub kind: DirectoryKind,
    pub location: Option<String>,
}

/// One permission result, as printed by `perms --json`.
#[derive(Debug, Serialize)]
pub struct PermissionEntry {
    pub path: PathBuf,
    pub permissions: PermissionFlags,
}

/// Print one or all well-known directories.
///
/// When listing every kind, kinds the platform lacks are reported and skipped;
/// an explicitly requested kind that is unavailable is an error.
pub fn run_dirs(
    provider: &PathProvider,
    kind: Option<DirectoryKind>,
    uri: bool,
    prepare: bool,
    json: bool,
) -> Result<()> {
    if prepare {
        for (kind, path) in provider.prepare_roots()? {
            if !json {
                print_success(&format!("{} directory ready: {}", kind, path.display()));
            }
        }
    }

    let kinds = match kind {
        Some(kind) => vec![kind],
        None => DirectoryKind::ALL.to_vec(),
    };
    let listing_all = kinds.len() > 1;

    let mut entries = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let location = if uri {
            provider.directory_uri(kind)
        } else {
            provider
                .resolve_directory(kind)
                .map(|path| path.display().to_string())
        };

        match location {
            Ok(location) => entries.push(DirectoryEntry {
                kind,
                location: Some(location),
            }),
            Err(Error::UnsupportedDirectoryKind(kind)) if listing_all => {
                if !json {
                    print_warning(&format!("No {} directory on this platform", kind));
                }
                entries.push(DirectoryEntry {
                    kind,
                    location: None,
                });
            }
            Err(e) => return Err(e),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            if let Some(location) = &entry.location {
                print_directory(entry.kind, location);
            }
        }
    }

    Ok(())
}

/// Create each directory if it is missing.
pub fn run_ensure_dir(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        let existed = path.is_dir();
        if ensure_directory_exists(path)? {
            if existed {
                print_info(&format!("Directory already exists: {}", path.display()));
            } else {
                print_success(&format!("Created directory: {}", path.display()));
            }
        } else {
            print_warning(&format!("Directory still missing: {}", path.display()));
        }
    }
    Ok(())
}

/// Print `count` freshly generated paths.
///
/// With `require_dir`, fails before printing anything if the directory the
/// paths point into is missing.
pub fn run_gen_path(
    directory: &str,
    extension: &str,
    count: usize,
    require_dir: bool,
) -> Result<()> {
    let paths: Vec<_> = (0..count)
        .map(|_| generate_path(directory, extension))
        .collect();

    if require_dir {
        if let Some(first) = paths.first() {
            check_parent_dir_exists(first)?;
        }
    }

    for path in &paths {
        println!("{}", path);
    }
    Ok(())
}

/// Print the MD5 digest of a file, literal text, or stdin.
pub fn run_md5(
    file: Option<&Path>,
    text: Option<&str>,
    expect: Option<&str>,
    json: bool,
) -> Result<()> {
    let expected = expect.map(parse_expected_digest).transpose()?;

    let (hash, label) = match (file, text) {
        (_, Some(text)) => (digest(text), "-".to_string()),
        (Some(path), None) => (hash_file_with_progress(path, !json)?, path.display().to_string()),
        (None, None) => (digest_reader(std::io::stdin().lock())?, "-".to_string()),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "md5": hash, "source": label }))?
        );
    } else {
        println!("{}  {}", hash, label);
    }

    verify_digest(expected, &hash)
}

/// Normalize a user-supplied digest to lowercase and check its shape.
fn parse_expected_digest(value: &str) -> Result<String> {
    let normalized = value.trim().to_lowercase();
    if is_md5_hex(&normalized) {
        Ok(normalized)
    } else {
        Err(Error::InvalidDigest(value.to_string()))
    }
}

fn verify_digest(expected: Option<String>, actual: &str) -> Result<()> {
    match expected {
        Some(expected) if expected != actual => Err(Error::DigestMismatch {
            expected,
            actual: actual.to_string(),
        }),
        _ => Ok(()),
    }
}

fn hash_file_with_progress(path: &Path, show_progress: bool) -> Result<String> {
    let size = std::fs::metadata(path)?.len();
    if !show_progress || size <= PROGRESS_THRESHOLD {
        return digest_file(path);
    }

    let bar = create_hash_bar(size);
    let file = File::open(path)?;
    let hash = digest_reader(bar.wrap_read(file));
    bar.finish_and_clear();
    hash
}

/// Print read/write access for each path.
pub fn run_perms(paths: &[PathBuf], json: bool) -> Result<()> {
    let entries: Vec<PermissionEntry> = paths
        .iter()
        .map(|path| PermissionEntry {
            path: path.clone(),
            permissions: query_permissions(path),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            print_permissions(entry.permissions, &entry.path.display().to_string());
        }
    }

    Ok(())
}
