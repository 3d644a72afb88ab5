//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::fs::DirectoryKind;
use regex::Regex;

/// Maximum length of any application identity component.
const MAX_IDENTITY_LENGTH: usize = 64;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_identity("app.qualifier", &config.app.qualifier, true)?;
    validate_identity("app.organization", &config.app.organization, true)?;
    validate_identity("app.application", &config.app.application, false)?;

    for kind in DirectoryKind::ALL {
        validate_override(kind, config)?;
    }

    Ok(())
}

/// Validate one component of the application identity.
pub fn validate_identity(field: &str, value: &str, allow_empty: bool) -> Result<()> {
    if value.is_empty() {
        if allow_empty {
            return Ok(());
        }
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Value cannot be empty".to_string(),
        });
    }

    if value.len() > MAX_IDENTITY_LENGTH {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Value must be at most {} characters (got {})",
                MAX_IDENTITY_LENGTH,
                value.len()
            ),
        });
    }

    let pattern = Regex::new(r"^[A-Za-z0-9 ._-]+$").unwrap();
    if !pattern.is_match(value) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "'{}' may only contain letters, digits, spaces, '.', '_' and '-'",
                value
            ),
        });
    }

    Ok(())
}

fn validate_override(kind: DirectoryKind, config: &Config) -> Result<()> {
    if let Some(path) = config.override_for(kind) {
        if !path.is_absolute() {
            return Err(Error::ConfigValidation {
                field: format!("directories.{}", kind),
                message: format!("Path must be absolute (got '{}')", path.display()),
            });
        }
    }

    Ok(())
}
