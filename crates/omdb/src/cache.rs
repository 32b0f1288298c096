//! Durable response cache backed by a single JSON file.
//!
//! The whole map is read at startup and rewritten after every insertion, so a
//! crash loses at most the lookup in flight.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::api_types::MetadataResponse;
use crate::error::OmdbError;

/// `title||year` → response, persisted as a JSON object.
#[derive(Debug)]
pub struct ResponseCache {
    path: PathBuf,
    entries: BTreeMap<String, MetadataResponse>,
}

impl ResponseCache {
    /// Load the cache file at `path`. A missing or blank file yields an empty cache.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or does not
    /// contain a JSON object of responses.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, OmdbError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)
                .map_err(|source| OmdbError::CacheFormat { path: path.clone(), source })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(OmdbError::CacheIo { path, source }),
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded OMDb cache");
        Ok(Self { path, entries })
    }

    /// Cache key for a lookup. A missing year renders as `None`.
    #[must_use]
    pub fn key(title: &str, year: Option<i32>) -> String {
        match year {
            Some(year) => format!("{title}||{year}"),
            None => format!("{title}||None"),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetadataResponse> {
        self.entries.get(key)
    }

    /// Insert an entry and rewrite the cache file.
    ///
    /// # Errors
    /// Returns an error if the cache file cannot be written.
    pub fn insert(&mut self, key: String, response: MetadataResponse) -> Result<(), OmdbError> {
        self.entries.insert(key, response);
        self.persist()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a sibling temp file, then rename over the cache file.
    fn persist(&self) -> Result<(), OmdbError> {
        let io_err = |source| OmdbError::CacheIo { path: self.path.clone(), source };
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|source| OmdbError::CacheFormat { path: self.path.clone(), source })?;

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, json).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }
}
