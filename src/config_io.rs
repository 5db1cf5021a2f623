//! Runtime configuration I/O operations.
//!
//! This module contains config directory detection and config loading
//! that require runtime dependencies (dirs, tracing).
//! These are separated from config.rs so the core library builds without them.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Path of the user config file: `{config_dir}/hexed/config.json`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hexed").join("config.json"))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist and parse. Without one, the user config file is
/// used when present; otherwise the defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    resolve_config_from(explicit, user_config_path().as_deref())
}

/// Like [`resolve_config`] with the user config location supplied by the caller
pub fn resolve_config_from(
    explicit: Option<&Path>,
    user_path: Option<&Path>,
) -> Result<Config, ConfigError> {
    let config = match (explicit, user_path) {
        (Some(path), _) => {
            tracing::debug!("Loading config from {:?}", path);
            Config::load_from_file(path).map_err(|e| prefix_path(e, path))?
        }
        (None, Some(path)) if path.exists() => {
            tracing::debug!("Loading user config from {:?}", path);
            Config::load_from_file(path).map_err(|e| prefix_path(e, path))?
        }
        _ => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    config.validate()?;
    Ok(config)
}

fn prefix_path(err: ConfigError, path: &Path) -> ConfigError {
    let with_path = |msg: String| format!("{}: {}", path.display(), msg);
    match err {
        ConfigError::IoError(msg) => ConfigError::IoError(with_path(msg)),
        ConfigError::ParseError(msg) => ConfigError::ParseError(with_path(msg)),
        other => other,
    }
}
