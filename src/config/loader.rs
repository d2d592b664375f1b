//! Loading the TOML configuration file.

use std::path::Path;

use tracing::{debug, info, instrument, trace};

use super::schema::ConfigFile;
use crate::error::{Result, SsaError};

/// Load and validate a configuration file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file is missing, `ConfigParse` for invalid
/// TOML and `ConfigInvalid` when validation fails.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SsaError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            SsaError::Io(e)
        }
    })?;
    debug!(bytes = content.len(), "Read config file");

    load_config_from_str(&content)
}

/// Load the file at `path` if it exists, otherwise return defaults.
pub fn load_optional_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        load_config(path)
    } else {
        trace!(path = %path.display(), "No config file, using defaults");
        Ok(ConfigFile::default())
    }
}

/// Parse and validate configuration text.
#[instrument(skip(content), fields(content_len = content.len()))]
pub fn load_config_from_str(content: &str) -> Result<ConfigFile> {
    let config: ConfigFile =
        toml::from_str(content).map_err(|e| SsaError::ConfigParse(format!("TOML: {e}")))?;

    config.validate()?;

    info!(
        app_name = ?config.app_name,
        artwork = config.artwork.len(),
        launcher_override = config.launcher.is_some(),
        "Configuration loaded"
    );
    Ok(config)
}
