//! Effective settings after merging flags, the config file and defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::path::resolve_path;
use super::schema::ConfigFile;
use crate::artwork::{ArtworkVariant, default_variants, label_for_suffix};
use crate::error::{Result, SsaError};
use crate::launcher::{Launcher, detect_launcher};
use crate::steam::default_userdata;

/// Name shown in the Steam library unless overridden.
pub const DEFAULT_APP_NAME: &str = "Minecraft Splitscreen";

/// Per-request artwork timeout unless overridden.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Values given on the command line or via environment; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub app_name: Option<String>,
    pub exe: Option<String>,
    pub start_dir: Option<String>,
    pub steam_userdata: Option<PathBuf>,
    pub fetch_timeout_secs: Option<u64>,
}

/// Fully resolved inputs for one run.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub home: PathBuf,
    pub app_name: String,
    pub steam_userdata: PathBuf,
    /// `None` means detect the launcher.
    pub launcher: Option<Launcher>,
    pub artwork: Vec<ArtworkVariant>,
    #[serde(serialize_with = "serialize_secs")]
    pub fetch_timeout: Duration,
}

fn serialize_secs<S: serde::Serializer>(
    d: &Duration,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_secs())
}

impl Settings {
    /// Merge `overrides` over `file` over defaults.
    ///
    /// `home` is used for `~` expansion and launcher detection; relative paths
    /// in the file resolve against `config_dir`.
    pub fn resolve(
        file: &ConfigFile,
        overrides: &Overrides,
        home: &Path,
        config_dir: &Path,
    ) -> Result<Self> {
        let app_name = overrides
            .app_name
            .clone()
            .or_else(|| file.app_name.clone())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        if app_name.is_empty() || app_name.contains('\0') {
            return Err(SsaError::ConfigInvalid(
                "app name must be non-empty and free of NUL bytes".to_string(),
            ));
        }

        let steam_userdata = match (&overrides.steam_userdata, &file.steam_userdata) {
            (Some(flag), _) => resolve_path(flag, home, Path::new("")),
            (None, Some(value)) => resolve_path(Path::new(value), home, config_dir),
            (None, None) => default_userdata(home),
        };

        let launcher = Self::resolve_launcher(file, overrides, home, config_dir)?;

        let artwork = if file.artwork.is_empty() {
            default_variants()
        } else {
            file.artwork
                .iter()
                .map(|e| {
                    let name = e.name.clone().unwrap_or_else(|| label_for_suffix(&e.suffix));
                    ArtworkVariant::new(name, e.suffix.clone(), e.url.clone())
                })
                .collect()
        };

        let timeout_secs = overrides
            .fetch_timeout_secs
            .or(file.fetch_timeout_secs)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
            .max(1);

        let settings = Self {
            home: home.to_path_buf(),
            app_name,
            steam_userdata,
            launcher,
            artwork,
            fetch_timeout: Duration::from_secs(timeout_secs),
        };
        debug!(?settings, "Resolved settings");
        Ok(settings)
    }

    fn resolve_launcher(
        file: &ConfigFile,
        overrides: &Overrides,
        home: &Path,
        config_dir: &Path,
    ) -> Result<Option<Launcher>> {
        let expand = |value: &str, base: &Path| {
            resolve_path(Path::new(value), home, base)
                .to_string_lossy()
                .into_owned()
        };

        let (exe, start_dir) = if let Some(exe) = &overrides.exe {
            let start_dir = overrides.start_dir.as_deref().map(|d| expand(d, Path::new("")));
            (expand(exe, Path::new("")), start_dir)
        } else if let Some(l) = &file.launcher {
            (expand(&l.exe, config_dir), Some(expand(&l.start_dir, config_dir)))
        } else if overrides.start_dir.is_some() {
            return Err(SsaError::ConfigInvalid(
                "--start-dir requires --exe".to_string(),
            ));
        } else {
            return Ok(None);
        };

        if exe.contains('\0') || start_dir.as_deref().is_some_and(|d| d.contains('\0')) {
            return Err(SsaError::ConfigInvalid(
                "launcher paths must not contain NUL bytes".to_string(),
            ));
        }

        let start_dir = start_dir.unwrap_or_else(|| {
            Path::new(&exe)
                .parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        Ok(Some(Launcher::custom(&exe, &start_dir)))
    }

    /// The configured launcher, or the detected one.
    pub fn launcher(&self) -> Result<Launcher> {
        match &self.launcher {
            Some(launcher) => Ok(launcher.clone()),
            None => detect_launcher(&self.home),
        }
    }
}
