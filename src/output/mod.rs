//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars

pub mod console;
pub mod progress;

pub use self::console::{
    print_directory, print_error, print_info, print_permissions, print_success, print_warning,
};
pub use progress::create_hash_bar;
