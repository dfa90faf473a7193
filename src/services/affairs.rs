// src/services/affairs.rs

//! Affair source service.
//!
//! Retrieves one affair's raw record either from the parliament web service
//! or from the local cache, depending on the run's `SourceMode`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

use crate::error::{AppError, Result};
use crate::models::{AffairId, AffairRecord, RunConfig, SourceConfig, SourceMode};
use crate::storage::AffairCache;
use crate::utils::http;

/// A successfully retrieved affair.
#[derive(Debug)]
pub struct FetchedAffair {
    pub id: AffairId,
    /// Response body exactly as received or cached
    pub raw: String,
    pub record: AffairRecord,
    /// Set when write-through caching failed; the record is still valid
    pub cache_error: Option<AppError>,
}

/// Service fetching affair records from network or cache.
pub struct AffairSource {
    client: Client,
    source: SourceConfig,
    mode: SourceMode,
    cache: Arc<dyn AffairCache>,
}

impl AffairSource {
    /// Create a source with an HTTP client built from the run configuration.
    pub fn new(config: &RunConfig, cache: Arc<dyn AffairCache>) -> Result<Self> {
        let client = http::create_async_client(&config.source)?;
        Ok(Self::with_client(client, config, cache))
    }

    /// Create a source around an existing client.
    pub fn with_client(client: Client, config: &RunConfig, cache: Arc<dyn AffairCache>) -> Self {
        Self {
            client,
            source: config.source.clone(),
            mode: config.mode,
            cache,
        }
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// Fetch and parse one affair.
    ///
    /// Errors are always scoped to `id`: `Fetch` in network mode,
    /// `CacheMiss`/`CacheRead` in cache mode. A failed write-through is
    /// reported in `FetchedAffair::cache_error` instead.
    pub async fn fetch(&self, id: &AffairId) -> Result<FetchedAffair> {
        match self.mode {
            SourceMode::Network { write_through } => self.fetch_network(id, write_through).await,
            SourceMode::Cache => self.fetch_cached(id).await,
        }
    }

    async fn fetch_network(&self, id: &AffairId, write_through: bool) -> Result<FetchedAffair> {
        let deadline = Duration::from_secs(self.source.timeout_secs);
        let raw = tokio::time::timeout(deadline, self.download(id))
            .await
            .map_err(|_| {
                AppError::fetch(id.as_str(), format!("timed out after {}s", deadline.as_secs()))
            })??;

        let record = AffairRecord::from_json(&raw)
            .map_err(|e| AppError::fetch(id.as_str(), format!("unexpected payload: {e}")))?;

        let cache_error = if write_through {
            self.cache
                .put(id, &raw)
                .await
                .err()
                .map(|e| AppError::cache_write(id.as_str(), e))
        } else {
            None
        };

        Ok(FetchedAffair {
            id: id.clone(),
            raw,
            record,
            cache_error,
        })
    }

    /// GET the affair and return the body of a 200 response.
    async fn download(&self, id: &AffairId) -> Result<String> {
        let url = http::affair_url(&self.source.base_url, id.as_str(), &self.source.lang)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/json")
            .send()
            .await
            .map_err(|e| AppError::fetch(id.as_str(), format!("connection error: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::fetch(id.as_str(), format!("HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::fetch(id.as_str(), format!("reading body: {e}")))?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::fetch(id.as_str(), format!("body is not UTF-8: {e}")))
    }

    async fn fetch_cached(&self, id: &AffairId) -> Result<FetchedAffair> {
        let raw = match self.cache.get(id).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Err(AppError::CacheMiss(id.to_string())),
            Err(e) => return Err(AppError::cache_read(id.as_str(), e)),
        };

        let record = AffairRecord::from_json(&raw)
            .map_err(|e| AppError::cache_read(id.as_str(), format!("unexpected payload: {e}")))?;

        Ok(FetchedAffair {
            id: id.clone(),
            raw,
            record,
            cache_error: None,
        })
    }
}
