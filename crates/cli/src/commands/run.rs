use anyhow::Result;
use cinedb_core::sqlite_path_from_url;
use cinedb_pipeline::{EtlConfig, run};
use std::path::PathBuf;

use crate::ensure_db_dir;

pub(crate) async fn run_etl(
    movies: PathBuf,
    ratings: PathBuf,
    db_url: &str,
    omdb_key: Option<String>,
    cache_file: PathBuf,
) -> Result<()> {
    let db_path = sqlite_path_from_url(db_url)?;
    ensure_db_dir(&db_path)?;

    let config = EtlConfig {
        catalog_path: movies,
        ratings_path: ratings,
        db_path,
        cache_path: cache_file,
        api_key: omdb_key.filter(|key| !key.trim().is_empty()),
    };
    let report = run(&config).await?;
    tracing::info!(
        items = report.load.items_written,
        ratings = report.load.ratings_inserted,
        db = %config.db_path.display(),
        "ETL finished"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
