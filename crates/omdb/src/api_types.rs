use std::collections::BTreeMap;

use cinedb_core::Enrichment;
use serde::{Deserialize, Serialize};

const RESPONSE_TRUE: &str = "True";
const RESPONSE_FALSE: &str = "False";

/// OMDb response body, as returned by the API and as stored in the cache.
///
/// Only the fields used for enrichment are typed; everything else the API
/// sends is kept in `extra` so cache entries round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataResponse {
    /// `"True"` or `"False"`
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "Plot", default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(rename = "Director", default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(rename = "BoxOffice", default, skip_serializing_if = "Option::is_none")]
    pub box_office: Option<String>,
    #[serde(rename = "imdbID", default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl MetadataResponse {
    /// Negative placeholder cached in place of a failed lookup.
    #[must_use]
    pub fn failure(tag: impl Into<String>) -> Self {
        Self {
            response: RESPONSE_FALSE.to_owned(),
            error: Some(tag.into()),
            plot: None,
            director: None,
            box_office: None,
            imdb_id: None,
            extra: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response == RESPONSE_TRUE
    }

    /// Enrichment fields, present only for successful responses.
    #[must_use]
    pub fn enrichment(&self) -> Option<Enrichment> {
        if !self.is_success() {
            return None;
        }
        Some(Enrichment {
            plot: self.plot.clone(),
            director: self.director.clone(),
            box_office: self.box_office.clone(),
            external_id: self.imdb_id.clone(),
        })
    }
}
