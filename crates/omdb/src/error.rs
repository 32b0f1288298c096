//! Typed error enum for the OMDb crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from OMDb lookups and the response cache.
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}")]
    HttpStatus { code: u16 },
    #[error("request timed out")]
    Timeout,
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("cache file {}: {source}", path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cache file {} is not a valid response cache: {source}", path.display())]
    CacheFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl OmdbError {
    /// Tag stored in the `Error` field of a cached negative response.
    #[must_use]
    pub fn failure_tag(&self) -> String {
        match self {
            Self::HttpStatus { code } => format!("HTTP {code}"),
            Self::Timeout => "Timeout".to_owned(),
            other => other.to_string(),
        }
    }

    /// Whether this error comes from the local cache rather than the remote API.
    #[must_use]
    pub const fn is_cache_error(&self) -> bool {
        matches!(self, Self::CacheIo { .. } | Self::CacheFormat { .. })
    }
}
