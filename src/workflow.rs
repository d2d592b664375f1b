//! The add-shortcut pipeline: launcher → store insertion → artwork.
//!
//! Every input comes from [`Settings`]; nothing here reads the environment.
//! The store write completes before any artwork is fetched, and artwork
//! failures never turn into an error return.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::appid::ShortcutId;
use crate::artwork::{ArtworkFetcher, SyncReport, sync_assets_with};
use crate::config::Settings;
use crate::error::Result;
use crate::launcher::Launcher;
use crate::output::Output;
use crate::steam::{SteamUser, find_user};
use crate::vdf::{InsertPlan, Shortcut, insert_shortcut, plan_insert};

/// Options for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compute the insertion without writing anything or fetching artwork.
    pub dry_run: bool,
    /// Leave the grid directory alone.
    pub skip_artwork: bool,
}

/// Everything a run did, for output and tests.
#[derive(Debug, Clone, Serialize)]
pub struct AddReport {
    pub ok: bool,
    pub dry_run: bool,
    pub app_name: String,
    pub appid: ShortcutId,
    pub index: u32,
    pub store_path: PathBuf,
    pub launcher: Launcher,
    pub steam_user: SteamUser,
    pub shortcut: Shortcut,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<InsertPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork: Option<SyncReport>,
}

/// Adds one shortcut as described by `settings`.
pub struct AddShortcut<'a> {
    settings: &'a Settings,
    options: RunOptions,
}

impl<'a> AddShortcut<'a> {
    pub const fn new(settings: &'a Settings, options: RunOptions) -> Self {
        Self { settings, options }
    }

    /// Run the pipeline, reporting each stage to `out`.
    ///
    /// # Errors
    ///
    /// `LauncherNotFound`, `NoStoreUser` and `MalformedStore` abort the run;
    /// in the last case the store file is unchanged.
    #[instrument(skip_all, fields(app = %self.settings.app_name, dry_run = self.options.dry_run))]
    pub fn run(&self, fetcher: &dyn ArtworkFetcher, out: &dyn Output) -> Result<AddReport> {
        let launcher = self.settings.launcher()?;
        out.launcher_detected(&launcher);
        if !Path::new(&launcher.exe).exists() {
            warn!(exe = %launcher.exe, "Launch target missing");
            out.warning(&format!(
                "{} does not exist yet; the shortcut will not start until it does",
                launcher.exe
            ));
        }

        let user = find_user(&self.settings.steam_userdata)?;
        let store_path = user.shortcuts_path();
        let shortcut = Shortcut::new(
            &self.settings.app_name,
            &launcher.exe,
            &launcher.start_dir,
            &user.config_dir,
        );
        info!(user = %user.id, appid = %shortcut.appid, "Prepared shortcut");

        if self.options.dry_run {
            let plan = plan_insert(&store_path, &shortcut)?;
            out.shortcut_planned(&plan, &shortcut);
            return Ok(AddReport {
                ok: true,
                dry_run: true,
                app_name: self.settings.app_name.clone(),
                appid: shortcut.appid,
                index: plan.index,
                store_path,
                launcher,
                steam_user: user,
                shortcut,
                plan: Some(plan),
                artwork: None,
            });
        }

        user.ensure_config_dir()?;
        let index = insert_shortcut(&store_path, &shortcut)?;
        out.shortcut_added(index, &shortcut, &store_path);

        let artwork = if self.options.skip_artwork {
            None
        } else {
            Some(sync_assets_with(
                shortcut.appid,
                &user.grid_dir(),
                &self.settings.artwork,
                fetcher,
                |outcome| out.asset_outcome(outcome),
            ))
        };

        Ok(AddReport {
            ok: true,
            dry_run: false,
            app_name: self.settings.app_name.clone(),
            appid: shortcut.appid,
            index,
            store_path,
            launcher,
            steam_user: user,
            shortcut,
            plan: None,
            artwork,
        })
    }
}
