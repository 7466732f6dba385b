//! Catalog Loading Module
//!
//! This module retrieves the destination catalog from the configured source
//! (an HTTP URL or a local file path) and substitutes the built-in fallback
//! catalog on any failure. Loading never surfaces an error to the caller.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::models::{Catalog, CatalogDocument};

/// Where the session catalog came from
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Fetched from the configured HTTP source
    Remote,
    /// Read from the configured file path
    File,
    /// Built-in fallback catalog
    Fallback(FallbackReason),
}

/// Why the loader substituted the fallback catalog
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The request or file read failed outright
    Transport,
    /// The HTTP response carried a non-success status
    Status(u16),
    /// The body was not valid JSON for the expected shape
    Parse,
    /// Valid JSON, but none of the expected catalog keys were present
    Structure,
}

/// The catalog selected for this session, with its provenance
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// The destination catalog
    pub catalog: Catalog,
    /// How it was obtained
    pub source: CatalogSource,
}

/// Service that resolves the session catalog from its configured source
pub struct CatalogLoader {
    client: Client,
    source: String,
}

impl CatalogLoader {
    /// Create a loader for the configured catalog source
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(concat!("tripscout/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            source: config.source.clone(),
        }
    }

    /// Load the catalog, substituting the fallback on any failure.
    ///
    /// Every failure mode maps to the built-in catalog with a recorded
    /// reason, so callers always receive a populated catalog.
    pub async fn load(&self) -> LoadedCatalog {
        match self.try_load().await {
            Ok(loaded) => {
                info!(
                    "Loaded catalog from {} ({} entries)",
                    self.source,
                    loaded.catalog.len()
                );
                loaded
            }
            Err(reason) => {
                warn!(
                    "Falling back to built-in catalog ({reason:?}), source: {}",
                    self.source
                );
                LoadedCatalog {
                    catalog: Catalog::fallback(),
                    source: CatalogSource::Fallback(reason),
                }
            }
        }
    }

    async fn try_load(&self) -> Result<LoadedCatalog, FallbackReason> {
        let remote = self.source.starts_with("http://") || self.source.starts_with("https://");
        let (body, source) = if remote {
            (self.fetch_remote().await?, CatalogSource::Remote)
        } else {
            (self.read_file().await?, CatalogSource::File)
        };

        let document: CatalogDocument = serde_json::from_str(&body).map_err(|e| {
            warn!("Catalog body failed to parse: {e}");
            FallbackReason::Parse
        })?;

        if !document.has_any_section() {
            warn!("Catalog document has none of the expected keys");
            return Err(FallbackReason::Structure);
        }

        Ok(LoadedCatalog {
            catalog: document.into(),
            source,
        })
    }

    async fn fetch_remote(&self) -> Result<String, FallbackReason> {
        debug!("Fetching catalog from {}", self.source);

        let response = self
            .client
            .get(&self.source)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| {
                warn!("Catalog request failed: {e}");
                FallbackReason::Transport
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog request returned status {status}");
            return Err(FallbackReason::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            warn!("Catalog body could not be read: {e}");
            FallbackReason::Transport
        })
    }

    async fn read_file(&self) -> Result<String, FallbackReason> {
        debug!("Reading catalog from {}", self.source);

        tokio::fs::read_to_string(&self.source).await.map_err(|e| {
            warn!("Catalog file {} unreadable: {e}", self.source);
            FallbackReason::Transport
        })
    }
}
