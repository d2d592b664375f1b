//! Library artwork for the shortcut.
//!
//! Steam picks up custom artwork from `userdata/<user>/config/grid`, keyed by
//! the shortcut app id. Fetching is behind [`ArtworkFetcher`] so the sync logic
//! can be tested without a network.

mod http;
pub mod mock;
mod sync;
mod variant;

pub use http::HttpFetcher;
pub use sync::{AssetOutcome, AssetStatus, SyncReport, sync_assets, sync_assets_with, sync_variant};
pub use variant::{ArtworkVariant, default_variants, label_for_suffix};

use crate::error::Result;

/// Source of artwork bytes.
pub trait ArtworkFetcher {
    /// Fetch the raw body at `url`.
    ///
    /// # Errors
    ///
    /// Returns `AssetFetchFailed` on network errors and non-200 responses.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
