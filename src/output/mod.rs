//! Output mode abstraction for robot and human output.

use std::path::Path;

use crate::artwork::AssetOutcome;
use crate::cli::Cli;
use crate::error::SsaError;
use crate::launcher::Launcher;
use crate::vdf::{InsertPlan, Shortcut};
use crate::workflow::AddReport;

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    /// JSON output for scripts.
    Robot(RobotFormat),
    /// Status lines for human users.
    Human { quiet: bool },
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human { quiet: cli.quiet }
        }
    }

    /// Returns true if output should be JSON.
    #[must_use]
    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    /// Convert into the appropriate Output implementation.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human { quiet } => Box::new(HumanOutput::new(quiet)),
        }
    }
}

/// Trait for all output operations.
///
/// The workflow reports each stage through these methods without knowing the
/// output mode. Robot output only emits the final report; the per-stage calls
/// exist for human status lines.
pub trait Output {
    // Basic messages
    fn error(&self, error: &SsaError);
    fn warning(&self, message: &str);

    // Pipeline stages
    fn launcher_detected(&self, launcher: &Launcher);
    fn shortcut_added(&self, index: u32, shortcut: &Shortcut, store_path: &Path);
    fn shortcut_planned(&self, plan: &InsertPlan, shortcut: &Shortcut);
    fn asset_outcome(&self, outcome: &AssetOutcome);
    fn report(&self, report: &AddReport);

    // Metadata
    fn version_info(&self, info: &VersionInfo);
}

/// Build metadata shown by `ssa version`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub git_dirty: bool,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
    pub target: &'static str,
}
