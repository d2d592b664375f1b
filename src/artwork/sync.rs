//! Per-variant artwork synchronization.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::{ArtworkFetcher, ArtworkVariant};
use crate::appid::ShortcutId;
use crate::fs_util::write_atomic;

/// What happened to one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssetStatus {
    /// File already existed and was left alone.
    Cached,
    /// File was fetched and written.
    Downloaded { bytes: usize },
    /// Fetch or write failed; other variants were still attempted.
    Failed { reason: String },
}

/// Result for a single variant.
#[derive(Debug, Clone, Serialize)]
pub struct AssetOutcome {
    pub variant: String,
    pub url: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: AssetStatus,
}

impl AssetOutcome {
    pub const fn is_ok(&self) -> bool {
        !matches!(self.status, AssetStatus::Failed { .. })
    }
}

/// Outcome of syncing a whole artwork set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl SyncReport {
    pub fn downloaded(&self) -> usize {
        self.count(|s| matches!(s, AssetStatus::Downloaded { .. }))
    }

    pub fn cached(&self) -> usize {
        self.count(|s| matches!(s, AssetStatus::Cached))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, AssetStatus::Failed { .. }))
    }

    /// True when every variant is present on disk.
    pub fn is_complete(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&AssetStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Ensure every variant exists in `destination_dir`, fetching missing ones.
pub fn sync_assets(
    id: ShortcutId,
    destination_dir: &Path,
    variants: &[ArtworkVariant],
    fetcher: &dyn ArtworkFetcher,
) -> SyncReport {
    sync_assets_with(id, destination_dir, variants, fetcher, |_| {})
}

/// Like [`sync_assets`], calling `on_outcome` as each variant finishes.
#[instrument(skip(variants, fetcher, on_outcome), fields(dir = %destination_dir.display()))]
pub fn sync_assets_with(
    id: ShortcutId,
    destination_dir: &Path,
    variants: &[ArtworkVariant],
    fetcher: &dyn ArtworkFetcher,
    mut on_outcome: impl FnMut(&AssetOutcome),
) -> SyncReport {
    let dir_error = fs::create_dir_all(destination_dir)
        .err()
        .map(|e| format!("cannot create {}: {e}", destination_dir.display()));

    let mut report = SyncReport::default();
    for variant in variants {
        let outcome = match &dir_error {
            Some(reason) => AssetOutcome {
                variant: variant.name.clone(),
                url: variant.url.clone(),
                path: destination_dir.join(variant.file_name(id)),
                status: AssetStatus::Failed {
                    reason: reason.clone(),
                },
            },
            None => sync_variant(id, destination_dir, variant, fetcher),
        };
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    info!(
        downloaded = report.downloaded(),
        cached = report.cached(),
        failed = report.failed(),
        "Artwork sync finished"
    );
    report
}

/// Sync one variant. Existing files are never re-fetched or compared.
pub fn sync_variant(
    id: ShortcutId,
    destination_dir: &Path,
    variant: &ArtworkVariant,
    fetcher: &dyn ArtworkFetcher,
) -> AssetOutcome {
    let path = destination_dir.join(variant.file_name(id));

    let status = if path.exists() {
        debug!(variant = %variant.name, path = %path.display(), "Already cached");
        AssetStatus::Cached
    } else {
        debug!(variant = %variant.name, url = %variant.url, "Downloading");
        match fetcher
            .fetch(&variant.url)
            .and_then(|bytes| write_atomic(&path, &bytes).map(|()| bytes.len()))
        {
            Ok(bytes) => AssetStatus::Downloaded { bytes },
            Err(e) => {
                warn!(variant = %variant.name, error = %e, "Artwork download failed");
                AssetStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    };

    AssetOutcome {
        variant: variant.name.clone(),
        url: variant.url.clone(),
        path,
        status,
    }
}
