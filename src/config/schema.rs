//! Configuration file schema.
//!
//! # Example
//!
//! ```toml
//! app_name = "Minecraft Splitscreen"
//! steam_userdata = "~/.steam/steam/userdata"
//! fetch_timeout_secs = 30
//!
//! [launcher]
//! exe = "~/.local/share/PollyMC/minecraftSplitscreen.sh"
//! start_dir = "~/.local/share/PollyMC"
//!
//! [[artwork]]
//! suffix = "_hero"
//! url = "https://cdn2.steamgriddb.com/hero/ecd812da02543c0269cfc2c56ab3c3c0.png"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SsaError};

/// Top-level configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Name shown in the Steam library.
    #[serde(default)]
    pub app_name: Option<String>,

    /// Steam `userdata` directory.
    #[serde(default)]
    pub steam_userdata: Option<String>,

    /// Per-request artwork download timeout.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,

    /// Skip launcher detection and use these values.
    #[serde(default)]
    pub launcher: Option<LauncherConfig>,

    /// Replaces the built-in artwork set when non-empty.
    #[serde(default)]
    pub artwork: Vec<ArtworkEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    pub exe: String,
    pub start_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ArtworkEntry {
    /// File-name suffix after the app id (`p`, `""`, `_hero`, `_logo`, `_icon`).
    pub suffix: String,
    pub url: String,
    /// Display label; derived from the suffix when omitted.
    #[serde(default)]
    pub name: Option<String>,
}

impl ConfigFile {
    /// Reject values that would corrupt the store or collide on disk.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("app_name", self.app_name.as_deref()),
            ("launcher.exe", self.launcher.as_ref().map(|l| l.exe.as_str())),
            (
                "launcher.start_dir",
                self.launcher.as_ref().map(|l| l.start_dir.as_str()),
            ),
        ];
        for (field, value) in fields {
            if value.is_some_and(|v| v.contains('\0')) {
                return Err(SsaError::ConfigInvalid(format!("{field} contains a NUL byte")));
            }
        }

        if self.app_name.as_deref().is_some_and(str::is_empty) {
            return Err(SsaError::ConfigInvalid("app_name is empty".to_string()));
        }

        if self.fetch_timeout_secs == Some(0) {
            return Err(SsaError::ConfigInvalid(
                "fetch_timeout_secs must be at least 1".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.artwork {
            if entry.url.trim().is_empty() {
                return Err(SsaError::ConfigInvalid(format!(
                    "artwork '{}' has an empty url",
                    entry.suffix
                )));
            }
            if entry.suffix.contains('/') || entry.suffix.contains('\\') {
                return Err(SsaError::ConfigInvalid(format!(
                    "artwork suffix '{}' contains a path separator",
                    entry.suffix
                )));
            }
            if !seen.insert(entry.suffix.as_str()) {
                return Err(SsaError::ConfigInvalid(format!(
                    "duplicate artwork suffix '{}'",
                    entry.suffix
                )));
            }
        }

        Ok(())
    }
}
