//! Console output utilities.

use console::style;

use crate::fs::{DirectoryKind, PermissionFlags};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a resolved directory line.
pub fn print_directory(kind: DirectoryKind, location: &str) {
    println!("{} {}", style(format!("{:<10}", kind.to_string())).bold(), location);
}

/// Print a permission line, `rw  /path` style.
pub fn print_permissions(flags: PermissionFlags, path: &str) {
    let flags_text = if flags.is_none() {
        style(flags.to_string()).red()
    } else {
        style(flags.to_string()).green()
    };
    println!("{}  {}", flags_text, path);
}
