use std::path::PathBuf;

use anyhow::Result;
use cinedb_core::transform::parse_title_and_year;
use cinedb_core::{CatalogItem, Rating, RawCatalogRow, RawRatingRow, TransformedDataset};
use cinedb_omdb::{CachedLookup, LookupStats, OmdbClient, OmdbError, ResponseCache};
use cinedb_storage::{LoadSummary, Storage};
use serde::Serialize;

use crate::extract::{read_catalog, read_ratings};

/// Inputs and outputs of one ETL run.
#[derive(Debug, Clone)]
pub struct EtlConfig {
    pub catalog_path: PathBuf,
    pub ratings_path: PathBuf,
    pub db_path: PathBuf,
    pub cache_path: PathBuf,
    /// Enrichment is skipped entirely when absent.
    pub api_key: Option<String>,
}

/// What a run read, looked up and wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub catalog_rows: usize,
    pub rating_rows: usize,
    /// Rating rows dropped because the rating did not parse as a number
    pub ratings_dropped: usize,
    pub lookups: Option<LookupStats>,
    pub load: LoadSummary,
}

/// Turn raw rows into a dataset, enriching each catalog row when a lookup
/// is supplied.
///
/// Lookups run one at a time in catalog order.
///
/// # Errors
/// Fails only when the response cache cannot be written.
pub async fn transform_and_enrich(
    catalog: &[RawCatalogRow],
    ratings: &[RawRatingRow],
    mut lookup: Option<&mut CachedLookup>,
) -> Result<TransformedDataset, OmdbError> {
    let mut items = Vec::with_capacity(catalog.len());
    for row in catalog {
        let enrichment = match lookup.as_deref_mut() {
            Some(lookup) => {
                let (title, year) = parse_title_and_year(&row.title);
                lookup.lookup(&title, year).await?.enrichment()
            },
            None => None,
        };
        items.push(CatalogItem::from_raw(row, enrichment));
    }

    let ratings: Vec<Rating> = ratings.iter().filter_map(Rating::from_raw).collect();
    Ok(TransformedDataset::new(items, ratings))
}

/// Run the pipeline, building the OMDb client from the environment when an
/// API key is configured.
///
/// # Errors
/// See [`run_with_client`].
pub async fn run(config: &EtlConfig) -> Result<RunReport> {
    let client = match &config.api_key {
        Some(key) => Some(OmdbClient::from_env(key.clone())?),
        None => {
            tracing::info!("No OMDb API key configured, skipping enrichment");
            None
        },
    };
    run_with_client(config, client).await
}

/// Extract, enrich, then load in one transaction.
///
/// The database is opened (and its schema ensured) before enrichment, but
/// nothing is written to it until every lookup has finished.
///
/// # Errors
/// Returns an error if an input file cannot be read, the cache file is
/// corrupt or unwritable, or the load fails (the load is rolled back).
pub async fn run_with_client(config: &EtlConfig, client: Option<OmdbClient>) -> Result<RunReport> {
    let catalog = read_catalog(&config.catalog_path)?;
    let ratings = read_ratings(&config.ratings_path)?;

    let storage = Storage::new(&config.db_path)?;

    let mut lookup = match client {
        Some(client) => {
            tracing::info!(
                endpoint = client.base_url(),
                delay = ?client.request_delay(),
                "OMDb enrichment enabled"
            );
            let cache = ResponseCache::load(&config.cache_path)?;
            tracing::info!(
                entries = cache.len(),
                path = %cache.path().display(),
                "Loaded OMDb response cache"
            );
            Some(CachedLookup::new(client, cache))
        },
        None => None,
    };

    tracing::info!(items = catalog.len(), "Transforming catalog");
    let dataset = transform_and_enrich(&catalog, &ratings, lookup.as_mut()).await.map_err(|err| {
        let context = if err.is_cache_error() {
            "Enrichment aborted, response cache could not be written"
        } else {
            "Enrichment aborted"
        };
        anyhow::Error::new(err).context(context)
    })?;
    let lookups = lookup.as_ref().map(CachedLookup::stats);
    if let Some(stats) = lookups {
        tracing::info!(
            cache_hits = stats.cache_hits,
            remote_calls = stats.remote_calls,
            failures = stats.failures,
            "Enrichment finished"
        );
    }

    let ratings_dropped = ratings.len() - dataset.ratings.len();
    if ratings_dropped > 0 {
        tracing::warn!(dropped = ratings_dropped, "Dropped ratings with non-numeric values");
    }

    let load = storage.load(&dataset)?;
    Ok(RunReport {
        catalog_rows: catalog.len(),
        rating_rows: ratings.len(),
        ratings_dropped,
        lookups,
        load,
    })
}
