//! Path helpers for configuration values.
//!
//! Supports absolute paths, paths relative to the config file, and "~" home
//! directory expansion against an explicit home directory.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, SsaError};

/// Resolve a path from a config file or flag.
///
/// Resolution rules:
/// 1. Paths starting with `~`: expanded to `home`
/// 2. Absolute paths: used as-is
/// 3. Relative paths: resolved relative to `base_dir`
pub fn resolve_path(path: &Path, home: &Path, base_dir: &Path) -> PathBuf {
    trace!(
        path = %path.display(),
        base_dir = %base_dir.display(),
        "Resolving path"
    );

    let path_str = path.to_string_lossy();

    if path_str == "~" || path_str.starts_with("~/") {
        let rest = path_str.strip_prefix("~/").unwrap_or("");
        let resolved = if rest.is_empty() {
            home.to_path_buf()
        } else {
            home.join(rest)
        };
        debug!(
            original = %path.display(),
            resolved = %resolved.display(),
            "Expanded home directory path"
        );
        return resolved;
    }

    if path.is_absolute() {
        return path.to_path_buf();
    }

    base_dir.join(path)
}

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| SsaError::ConfigInvalid("Could not determine home directory".to_string()))
}

/// Default configuration file: `<config dir>/ssa/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ssa").join("config.toml"))
}
