//! easyfs - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use easy_filesystem::{
    cli::{run_dirs, run_ensure_dir, run_gen_path, run_md5, run_perms, Args, Command},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    fs::PathProvider,
    output::print_error,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Io(_) | Error::NotADirectory(_) | Error::MissingParentDirectory(_) => {
                    ExitCode::from(exit_codes::IO_ERROR as u8)
                }
                Error::UnsupportedDirectoryKind(_) => {
                    ExitCode::from(exit_codes::UNSUPPORTED as u8)
                }
                Error::InvalidDigest(_) | Error::DigestMismatch { .. } => {
                    ExitCode::from(exit_codes::DIGEST_MISMATCH as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    match args.command {
        Command::Dirs { kind, uri, prepare } => {
            let provider = PathProvider::new(&config);
            run_dirs(&provider, kind.map(Into::into), uri, prepare, args.json)
        }
        Command::EnsureDir { paths } => run_ensure_dir(&paths),
        Command::GenPath {
            directory,
            ext,
            count,
            require_dir,
        } => run_gen_path(&directory, &ext, count, require_dir),
        Command::Md5 { file, text, expect } => run_md5(
            file.as_deref(),
            text.as_deref(),
            expect.as_deref(),
            args.json,
        ),
        Command::Perms { paths } => run_perms(&paths, args.json),
    }
}
