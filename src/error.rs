//! Error types for shortcut store and artwork operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Primary error type for `ssa` operations.
#[derive(Error, Debug)]
pub enum SsaError {
    // Collaborator errors
    #[error("No supported launcher found (searched {searched})")]
    LauncherNotFound { searched: PathBuf },

    #[error("No Steam user found under {root}")]
    NoStoreUser { root: PathBuf },

    // Store errors
    #[error("Unrecognized shortcuts file structure at {path}: {reason}")]
    MalformedStore {
        path: PathBuf,
        #[source]
        reason: StoreFormatError,
    },

    // Artwork errors
    #[error("Failed to download {url}: {reason}")]
    AssetFetchFailed { url: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Why raw store bytes cannot take another record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreFormatError {
    #[error("expected trailing bytes 08 08, found {tail}")]
    BadTerminator { tail: String },

    #[error("shortcut index {last} cannot be incremented")]
    IndexExhausted { last: u32 },
}

impl StoreFormatError {
    /// Attach the file the bytes came from.
    pub fn at(self, path: &Path) -> SsaError {
        SsaError::MalformedStore {
            path: path.to_path_buf(),
            reason: self,
        }
    }
}

impl SsaError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::LauncherNotFound { .. }
                | Self::NoStoreUser { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParse(_)
                | Self::ConfigInvalid(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::LauncherNotFound { .. } => {
                Some("Run the Minecraft Splitscreen installer to set up PollyMC, or pass --exe")
            }
            Self::NoStoreUser { .. } => {
                Some("Log in to Steam once to create its userdata, or pass --steam-userdata")
            }
            Self::MalformedStore { .. } => {
                Some("Close Steam and check shortcuts.vdf; the file was left unchanged")
            }
            Self::ConfigNotFound { .. } => Some("Check the --config path or unset SSA_CONFIG"),
            Self::ConfigParse(_) => Some("Fix the TOML syntax in the configuration file"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using SsaError.
pub type Result<T> = std::result::Result<T, SsaError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| SsaError::Other(format!("{}: {e}", f().into())))
    }
}
