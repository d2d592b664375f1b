//! Human-friendly status line output.

use std::path::Path;

use tracing::{debug, instrument};

use crate::artwork::{AssetOutcome, AssetStatus};
use crate::error::SsaError;
use crate::launcher::Launcher;
use crate::theme::SsaTheme;
use crate::vdf::{InsertPlan, Shortcut};
use crate::workflow::AddReport;

use super::{Output, VersionInfo};

/// Styled terminal output implementation for human users.
///
/// Status lines go to stdout, errors to stderr. `quiet` keeps errors and the
/// final summary only.
pub struct HumanOutput {
    theme: SsaTheme,
    quiet: bool,
}

impl HumanOutput {
    #[instrument]
    pub fn new(quiet: bool) -> Self {
        debug!("Creating HumanOutput");
        Self {
            theme: SsaTheme::default(),
            quiet,
        }
    }

    fn line(&self, text: &str) {
        if !self.quiet {
            println!("{text}");
        }
    }

    fn field(&self, label: &str, value: &str) {
        self.line(&format!(
            "   {} {}",
            self.theme.label.apply_to(format!("{label}:")),
            self.theme.path.apply_to(value)
        ));
    }
}

impl Output for HumanOutput {
    fn error(&self, error: &SsaError) {
        eprintln!("{} {error}", self.theme.diag_error.apply_to("[ERR]"));
        if let Some(suggestion) = error.suggestion() {
            eprintln!(
                "{} {}",
                self.theme.diag_warning.apply_to("Hint:"),
                self.theme.diag_hint.apply_to(suggestion)
            );
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {message}", self.theme.diag_warning.apply_to("[WARN]"));
    }

    fn launcher_detected(&self, launcher: &Launcher) {
        self.line(&format!(
            "{} Launcher: {}",
            self.theme.success.apply_to("[OK]"),
            self.theme.value.apply_to(&launcher.label)
        ));
        self.field("Launch script", &launcher.exe);
        self.field("Working directory", &launcher.start_dir);
    }

    fn shortcut_added(&self, index: u32, shortcut: &Shortcut, store_path: &Path) {
        self.line(&format!(
            "{} Added '{}' with index {} and appid {}",
            self.theme.success.apply_to("[OK]"),
            self.theme.value.apply_to(&shortcut.app_name),
            self.theme.index.apply_to(index),
            self.theme.appid.apply_to(shortcut.appid)
        ));
        self.field("Shortcuts file", &store_path.display().to_string());
    }

    fn shortcut_planned(&self, plan: &InsertPlan, shortcut: &Shortcut) {
        self.line(&format!(
            "{} Would add '{}' with index {} and appid {}",
            self.theme.header.apply_to("DRY RUN:"),
            self.theme.value.apply_to(&shortcut.app_name),
            self.theme.index.apply_to(plan.index),
            self.theme.appid.apply_to(shortcut.appid)
        ));
        let path = plan.store_path.display();
        let file_state = if plan.store_exists {
            let old_len = plan.new_len - plan.record_len;
            format!("{path} ({old_len} -> {} bytes)", plan.new_len)
        } else {
            format!("{path} (would be created, {} bytes)", plan.new_len)
        };
        self.field("Shortcuts file", &file_state);
        self.field("Icon", &shortcut.icon);
    }

    fn asset_outcome(&self, outcome: &AssetOutcome) {
        match &outcome.status {
            AssetStatus::Cached => self.line(&format!(
                "{} Skipping {} image, already exists",
                self.theme.muted.apply_to("[--]"),
                outcome.variant
            )),
            AssetStatus::Downloaded { bytes } => self.line(&format!(
                "{} Saved {} image ({bytes} bytes)",
                self.theme.success.apply_to("[OK]"),
                outcome.variant
            )),
            AssetStatus::Failed { reason } => self.line(&format!(
                "{} Failed to download {} image: {reason}",
                self.theme.warning.apply_to("[WARN]"),
                outcome.variant
            )),
        }
    }

    fn report(&self, report: &AddReport) {
        if report.dry_run {
            println!("Dry run complete, nothing was written.");
            return;
        }

        match &report.artwork {
            Some(art) if !art.is_complete() => println!(
                "{} Shortcut added; {} of {} artwork images missing. Rerun to retry.",
                self.theme.warning.apply_to("Done:"),
                art.failed(),
                art.outcomes.len()
            ),
            _ => println!(
                "{} Launch Steam to see {} in your Library.",
                self.theme.success.apply_to("All done."),
                report.app_name
            ),
        }
    }

    fn version_info(&self, info: &VersionInfo) {
        println!("ssa {}", info.version);
        println!(
            "git: {}{}",
            info.git_sha,
            if info.git_dirty { " (dirty)" } else { "" }
        );
        println!("built: {}", info.build_timestamp);
        println!("rustc: {}", info.rustc_version);
        println!("target: {}", info.target);
    }
}
