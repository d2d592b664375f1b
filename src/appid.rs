//! Shortcut app id derivation.
//!
//! Steam identifies non-Steam shortcuts by a 32-bit id with the high bit set.
//! The same value is written into the `appid` field of the shortcut record and
//! used as the file-name key for artwork in the `grid` directory, so it is
//! carried around as a single [`ShortcutId`] rather than a bare `u32`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Bit that marks an app id as belonging to a non-Steam shortcut.
pub const NON_STEAM_BIT: u32 = 0x8000_0000;

/// Identifier of a non-Steam shortcut. Bit 31 is always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShortcutId(u32);

impl ShortcutId {
    /// Derive the id from the display name and launch command.
    ///
    /// CRC-32 (IEEE) over `name ++ exe` with no separator, then bit 31 forced on.
    pub fn from_name_and_exe(display_name: &str, launch_command: &str) -> Self {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(display_name.as_bytes());
        hasher.update(launch_command.as_bytes());
        Self(NON_STEAM_BIT | hasher.finalize())
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Little-endian encoding as stored in the `appid` field.
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Artwork file name, e.g. `2147483649_hero.png`.
    pub fn grid_file_name(self, suffix: &str, extension: &str) -> String {
        format!("{}{suffix}.{extension}", self.0)
    }

    /// Icon path Steam reads for this shortcut: `<config_dir>/grid/<id>_icon.ico`.
    pub fn icon_path(self, config_dir: &Path) -> PathBuf {
        config_dir.join("grid").join(self.grid_file_name("_icon", "ico"))
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ShortcutId> for u32 {
    fn from(id: ShortcutId) -> Self {
        id.0
    }
}

impl TryFrom<u32> for ShortcutId {
    type Error = u32;

    /// Accepts only values with the non-Steam bit set.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value & NON_STEAM_BIT == 0 {
            Err(value)
        } else {
            Ok(Self(value))
        }
    }
}
