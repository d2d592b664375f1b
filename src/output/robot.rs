//! Robot mode JSON output implementation.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::artwork::AssetOutcome;
use crate::error::SsaError;
use crate::launcher::Launcher;
use crate::vdf::{InsertPlan, Shortcut};
use crate::workflow::AddReport;

use super::{Output, RobotFormat, VersionInfo};

/// JSON output implementation for scripting.
///
/// Exactly one JSON document is written to stdout per successful run; errors
/// go to stderr as JSON.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    fn render<T: Serialize + ?Sized>(&self, data: &T) -> String {
        let rendered = match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        };
        rendered.unwrap_or_else(|e| {
            serde_json::json!({ "error": true, "message": format!("serialization failed: {e}") })
                .to_string()
        })
    }

    /// Output any serializable data as JSON to stdout.
    #[instrument(skip(self, data), fields(format = ?self.format))]
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        let json = self.render(data);
        trace!(json_len = json.len(), "JSON serialized");
        println!("{json}");
    }
}

impl Output for RobotOutput {
    fn error(&self, error: &SsaError) {
        debug!(error = %error, "Robot: error");
        let json = serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
        );
    }

    fn warning(&self, message: &str) {
        debug!(message, "Robot: warning");
        eprintln!("{}", serde_json::json!({ "warning": true, "message": message }));
    }

    fn launcher_detected(&self, launcher: &Launcher) {
        trace!(label = %launcher.label, "Robot: launcher detected");
    }

    fn shortcut_added(&self, index: u32, shortcut: &Shortcut, store_path: &Path) {
        trace!(
            index,
            appid = %shortcut.appid,
            path = %store_path.display(),
            "Robot: shortcut added"
        );
    }

    fn shortcut_planned(&self, plan: &InsertPlan, _shortcut: &Shortcut) {
        trace!(index = plan.index, "Robot: shortcut planned");
    }

    fn asset_outcome(&self, outcome: &AssetOutcome) {
        trace!(variant = %outcome.variant, ok = outcome.is_ok(), "Robot: asset outcome");
    }

    fn report(&self, report: &AddReport) {
        self.output_json(report);
    }

    fn version_info(&self, info: &VersionInfo) {
        self.output_json(info);
    }
}
