use anyhow::Result;
use cinedb_core::constants::{
    DEFAULT_CACHE_FILE, DEFAULT_DATABASE_PATH, DEFAULT_DATABASE_URL, DEFAULT_SQL_FILE,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cinedb")]
#[command(about = "Movie catalog and ratings ETL with OMDb enrichment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract both CSVs, enrich the catalog and load everything into SQLite
    Run {
        /// Catalog CSV (movieId,title,genres)
        #[arg(long)]
        movies: PathBuf,
        /// Ratings CSV (userId,movieId,rating,timestamp)
        #[arg(long)]
        ratings: PathBuf,
        #[arg(long, default_value = DEFAULT_DATABASE_URL)]
        db: String,
        /// Without a key, enrichment is skipped
        #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
        omdb_key: Option<String>,
        #[arg(long, default_value = DEFAULT_CACHE_FILE)]
        cache_file: PathBuf,
    },
    /// Run every statement of a SQL file against the database, read-only
    Query {
        #[arg(long, default_value = DEFAULT_DATABASE_PATH)]
        db: PathBuf,
        #[arg(long, default_value = DEFAULT_SQL_FILE)]
        sql_file: PathBuf,
    },
    /// Print row counts per table
    Stats {
        #[arg(long, default_value = DEFAULT_DATABASE_PATH)]
        db: PathBuf,
    },
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { movies, ratings, db, omdb_key, cache_file } => {
            commands::run::run_etl(movies, ratings, &db, omdb_key, cache_file).await?;
        },
        Commands::Query { db, sql_file } => {
            commands::query::run_query(&db, &sql_file)?;
        },
        Commands::Stats { db } => {
            commands::stats::run_stats(&db)?;
        },
    }

    Ok(())
}
