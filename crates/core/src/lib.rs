//! Core types and normalization rules for cinedb
//!
//! This crate contains the domain model shared by the metadata client,
//! storage layer and pipeline, plus the pure record transforms.

pub mod constants;
mod dataset;
mod database_url;
pub mod env_config;
mod error;
mod item;
mod rating;
pub mod transform;

pub use dataset::TransformedDataset;
pub use database_url::sqlite_path_from_url;
pub use error::{CoreError, Result};
pub use item::{CatalogItem, Enrichment, RawCatalogRow};
pub use rating::{Rating, RawRatingRow};
