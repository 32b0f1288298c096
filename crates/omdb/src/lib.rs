//! OMDb metadata lookups for catalog enrichment.
//!
//! [`OmdbClient`] issues single GET requests; [`CachedLookup`] puts the
//! durable [`ResponseCache`] in front of it and turns every failure into a
//! cached negative response.

mod api_types;
mod cache;
mod client;
mod error;
mod lookup;


pub use api_types::MetadataResponse;
pub use cache::ResponseCache;
pub use client::OmdbClient;
pub use error::OmdbError;
pub use lookup::{CachedLookup, LookupStats};
