use serde::Serialize;

use crate::api_types::MetadataResponse;
use crate::cache::ResponseCache;
use crate::client::OmdbClient;
use crate::error::OmdbError;

/// Counters for one enrichment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LookupStats {
    pub cache_hits: usize,
    pub remote_calls: usize,
    /// Remote calls that ended in a cached negative result
    pub failures: usize,
}

/// Cache-first metadata lookups.
///
/// A lookup that fails remotely is cached as a negative response and never
/// retried for the same key, in this run or any later run sharing the cache file.
#[derive(Debug)]
pub struct CachedLookup {
    client: OmdbClient,
    cache: ResponseCache,
    stats: LookupStats,
}

impl CachedLookup {
    #[must_use]
    pub fn new(client: OmdbClient, cache: ResponseCache) -> Self {
        Self { client, cache, stats: LookupStats::default() }
    }

    /// Resolve `(title, year)` from the cache, or from OMDb on a miss.
    ///
    /// # Errors
    /// Only cache write failures are returned; remote failures become
    /// negative responses.
    pub async fn lookup(
        &mut self,
        title: &str,
        year: Option<i32>,
    ) -> Result<MetadataResponse, OmdbError> {
        let key = ResponseCache::key(title, year);
        if let Some(hit) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return Ok(hit.clone());
        }

        self.stats.remote_calls += 1;
        let response = match self.client.fetch(title, year).await {
            Ok(response) => response,
            Err(err) => {
                self.stats.failures += 1;
                match &err {
                    OmdbError::Timeout => {
                        tracing::warn!(title, "OMDb lookup timed out, skipping");
                    },
                    OmdbError::HttpStatus { code } => {
                        tracing::warn!(title, code = *code, "OMDb returned HTTP error");
                    },
                    other => {
                        tracing::warn!(title, error = %other, "OMDb lookup failed");
                    },
                }
                MetadataResponse::failure(err.failure_tag())
            },
        };

        self.cache.insert(key, response.clone())?;
        Ok(response)
    }

    #[must_use]
    pub const fn stats(&self) -> LookupStats {
        self.stats
    }

    #[must_use]
    pub const fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}
