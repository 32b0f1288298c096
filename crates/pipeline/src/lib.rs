//! Extract, transform, enrich and load orchestration for cinedb.
//!
//! Reads the catalog and ratings CSVs, optionally enriches each catalog row
//! through the cached OMDb lookup, then hands the dataset to the storage
//! loader in a single transaction.

pub mod extract;
mod pipeline;


pub use pipeline::{EtlConfig, RunReport, run, run_with_client, transform_and_enrich};
