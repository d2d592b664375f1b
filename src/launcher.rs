//! Detection of the installed Minecraft launcher.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{Result, SsaError};

const POLLYMC_APPIMAGE: &str = "PollyMC-Linux-x86_64.AppImage";
const SPLITSCREEN_SCRIPT: &str = "minecraftSplitscreen.sh";

/// Launch command and working directory for the shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Launcher {
    pub exe: String,
    pub start_dir: String,
    pub label: String,
}

impl Launcher {
    /// A launcher given explicitly rather than detected.
    pub fn custom(exe: &str, start_dir: &str) -> Self {
        Self {
            exe: exe.to_string(),
            start_dir: start_dir.to_string(),
            label: "custom".to_string(),
        }
    }
}

/// Find PollyMC under `<home>/.local/share`.
///
/// The AppImage must exist and be executable. The splitscreen script is taken
/// from the PollyMC directory when present, otherwise from PrismLauncher's.
#[instrument]
pub fn detect_launcher(home: &Path) -> Result<Launcher> {
    let pollymc_dir = search_dir(home);
    let appimage = pollymc_dir.join(POLLYMC_APPIMAGE);

    if !is_executable(&appimage) {
        debug!(path = %appimage.display(), "PollyMC AppImage missing or not executable");
        return Err(SsaError::LauncherNotFound {
            searched: pollymc_dir,
        });
    }

    let local_script = pollymc_dir.join(SPLITSCREEN_SCRIPT);
    let script = if local_script.exists() {
        local_script
    } else {
        debug!("Splitscreen script not in PollyMC dir, using PrismLauncher path");
        home.join(".local")
            .join("share")
            .join("PrismLauncher")
            .join(SPLITSCREEN_SCRIPT)
    };

    Ok(Launcher {
        exe: path_string(&script),
        start_dir: path_string(&pollymc_dir),
        label: "PollyMC".to_string(),
    })
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// PollyMC install directory under `home`.
pub fn search_dir(home: &Path) -> PathBuf {
    home.join(".local").join("share").join("PollyMC")
}
