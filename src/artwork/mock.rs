//! Mock artwork fetcher for tests.
//!
//! Records every requested URL and serves canned bytes, with optional
//! per-URL failures.
//!
//! ```rust,ignore
//! use ssa::artwork::mock::MockFetcher;
//!
//! let fetcher = MockFetcher::new().fail_url("https://example.com/hero.png", "HTTP 404");
//! let report = ssa::artwork::sync_assets(id, dir, &variants, &fetcher);
//! assert_eq!(fetcher.fetch_count(), variants.len());
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

use super::ArtworkFetcher;
use crate::error::{Result, SsaError};

/// Default body served for any URL without a scripted response.
pub const MOCK_BODY: &[u8] = b"\x89PNG mock artwork";

/// In-memory fetcher that never touches the network.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: HashMap<String, Vec<u8>>,
    failures: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    #[must_use]
    pub fn with_response(mut self, url: &str, body: &[u8]) -> Self {
        self.responses.insert(url.to_string(), body.to_vec());
        self
    }

    /// Fail every request for `url` with `reason`.
    #[must_use]
    pub fn fail_url(mut self, url: &str, reason: &str) -> Self {
        self.failures.insert(url.to_string(), reason.to_string());
        self
    }

    fn log(&self) -> MutexGuard<'_, Vec<String>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.log().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.log().len()
    }

    /// Panics if `url` was requested.
    pub fn assert_not_fetched(&self, url: &str) {
        let requests = self.requests();
        assert!(
            !requests.iter().any(|r| r == url),
            "Expected {url} not to be fetched, requests: {requests:?}"
        );
    }
}

impl ArtworkFetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        trace!(url, "Mock fetch");
        self.log().push(url.to_string());

        if let Some(reason) = self.failures.get(url) {
            return Err(SsaError::AssetFetchFailed {
                url: url.to_string(),
                reason: reason.clone(),
            });
        }

        Ok(self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| MOCK_BODY.to_vec()))
    }
}
