//! Locating the Steam user whose shortcuts are edited.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{Result, SsaError};

/// Default userdata root relative to the home directory.
pub fn default_userdata(home: &Path) -> PathBuf {
    home.join(".steam").join("steam").join("userdata")
}

/// One Steam account's userdata directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SteamUser {
    pub id: String,
    pub config_dir: PathBuf,
}

impl SteamUser {
    /// `config/shortcuts.vdf`
    pub fn shortcuts_path(&self) -> PathBuf {
        self.config_dir.join("shortcuts.vdf")
    }

    /// `config/grid`, where artwork lives.
    pub fn grid_dir(&self) -> PathBuf {
        self.config_dir.join("grid")
    }

    /// Create the config directory if Steam has not yet.
    pub fn ensure_config_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}

/// Pick the first numeric account directory under `userdata_root`.
///
/// Entries are sorted by name so the choice is stable across runs.
#[instrument]
pub fn find_user(userdata_root: &Path) -> Result<SteamUser> {
    let no_user = || SsaError::NoStoreUser {
        root: userdata_root.to_path_buf(),
    };

    let entries = fs::read_dir(userdata_root).map_err(|e| {
        debug!(error = %e, "Cannot read userdata root");
        no_user()
    })?;

    let mut ids: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()))
        .collect();
    ids.sort();

    let id = ids.into_iter().next().ok_or_else(no_user)?;
    let config_dir = userdata_root.join(&id).join("config");
    debug!(user = %id, config_dir = %config_dir.display(), "Selected Steam user");

    Ok(SteamUser { id, config_dir })
}
