//! CLI module.
//!
//! Provides argument parsing and the subcommand implementations.

pub mod args;
pub mod commands;

pub use args::{Args, Command, DirectoryKindArg};
pub use commands::{run_dirs, run_ensure_dir, run_gen_path, run_md5, run_perms};
