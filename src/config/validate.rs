// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{BuildyError, Result};

/// Check the invariants serde can't express.
///
/// Every tool name must be non-empty (after trimming) and the image name
/// must not contain whitespace, since it's spliced into a shell command line.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    ensure_non_empty("[docker].binary", &cfg.docker.binary)?;
    ensure_non_empty("[docker].image", &cfg.docker.image)?;
    ensure_non_empty("[docker].context", &cfg.docker.context)?;
    ensure_non_empty("[compose].command", &cfg.compose.command)?;
    ensure_non_empty("[shell].program", &cfg.shell.program)?;

    if cfg.docker.image.chars().any(char::is_whitespace) {
        return Err(BuildyError::ConfigError(format!(
            "[docker].image must not contain whitespace (got {:?})",
            cfg.docker.image
        )));
    }

    Ok(())
}

fn ensure_non_empty(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BuildyError::ConfigError(format!("{key} must not be empty")));
    }
    Ok(())
}
