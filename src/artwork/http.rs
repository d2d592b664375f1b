//! HTTP artwork fetcher backed by `ureq`.

use std::io::Read;
use std::time::Duration;

use tracing::{debug, instrument};

use super::ArtworkFetcher;
use crate::error::{Result, SsaError};

/// Largest response body accepted for one image.
const MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

/// SteamGridDB's CDN rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0";

/// Blocking HTTP fetcher.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

fn fetch_failed(url: &str, reason: impl Into<String>) -> SsaError {
    SsaError::AssetFetchFailed {
        url: url.to_string(),
        reason: reason.into(),
    }
}

impl ArtworkFetcher for HttpFetcher {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = match self.agent.get(url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => {
                return Err(fetch_failed(url, format!("HTTP {code}")));
            }
            Err(e) => return Err(fetch_failed(url, e.to_string())),
        };

        if response.status() != 200 {
            return Err(fetch_failed(url, format!("HTTP {}", response.status())));
        }

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_BODY_BYTES + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| fetch_failed(url, e.to_string()))?;
        if bytes.len() as u64 > MAX_BODY_BYTES {
            return Err(fetch_failed(
                url,
                format!("response larger than {MAX_BODY_BYTES} bytes"),
            ));
        }

        debug!(len = bytes.len(), "Fetched artwork");
        Ok(bytes)
    }
}
