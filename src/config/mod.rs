//! Configuration module for easy-filesystem.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{AppConfig, Config, DirectoriesConfig};
pub use validation::validate_config;
