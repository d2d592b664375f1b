//! Environment variable helpers for tests.

use env_lock::{EnvGuard as LockedEnvGuard, lock_env};
use tracing::trace;

/// Holds the process-wide env lock and restores the variables on drop.
///
/// Only one guard may be alive per test.
pub struct EnvGuard<'a> {
    _guard: LockedEnvGuard<'a>,
}

/// Point `dirs::home_dir` and `dirs::config_dir` at a fake home.
#[must_use]
pub fn with_fake_home<'a>(home: &str, config: &str) -> EnvGuard<'a> {
    trace!(home, config, "Overriding HOME and XDG_CONFIG_HOME");
    EnvGuard {
        _guard: lock_env([("HOME", Some(home)), ("XDG_CONFIG_HOME", Some(config))]),
    }
}
