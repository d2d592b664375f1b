//! Configuration for `ssa`.
//!
//! An optional TOML file supplies defaults; command-line flags and environment
//! variables override it. [`Settings`] holds the merged result.

mod loader;
mod path;
mod schema;
mod settings;

pub use loader::{load_config, load_config_from_str, load_optional_config};
pub use path::{default_config_path, home_dir, resolve_path};
pub use schema::{ArtworkEntry, ConfigFile, LauncherConfig};
pub use settings::{DEFAULT_APP_NAME, DEFAULT_FETCH_TIMEOUT_SECS, Overrides, Settings};
