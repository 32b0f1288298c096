use std::time::Duration;

use cinedb_core::constants::{OMDB_BASE_URL, REQUEST_DELAY_MS, REQUEST_TIMEOUT_SECS};
use cinedb_core::env_config::{
    ENV_HTTP_TIMEOUT_SECS, ENV_OMDB_URL, ENV_REQUEST_DELAY_MS, env_parse_with_default, env_string,
};
use reqwest::StatusCode;

use crate::api_types::MetadataResponse;
use crate::error::OmdbError;

/// Body excerpt length kept in parse error messages.
const ERROR_BODY_EXCERPT: usize = 200;

/// Client for OMDb title lookups.
pub struct OmdbClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) request_delay: Duration,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("request_delay", &self.request_delay)
            .finish()
    }
}

impl OmdbClient {
    /// Creates a client against `base_url` with the given request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, OmdbError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OmdbError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            base_url,
            request_delay: Duration::from_millis(REQUEST_DELAY_MS),
        })
    }

    /// Creates a client using the default endpoint, timeout and delay, each
    /// overridable through `CINEDB_*` environment variables.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env(api_key: String) -> Result<Self, OmdbError> {
        let base_url = env_string(ENV_OMDB_URL).unwrap_or_else(|| OMDB_BASE_URL.to_owned());
        let timeout_secs = env_parse_with_default(ENV_HTTP_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS);
        let delay_ms = env_parse_with_default(ENV_REQUEST_DELAY_MS, REQUEST_DELAY_MS);
        Ok(Self::new(api_key, base_url, Duration::from_secs(timeout_secs))?
            .with_request_delay(Duration::from_millis(delay_ms)))
    }

    /// Sets the pause applied after every remote call.
    #[must_use]
    pub const fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the post-request delay.
    #[must_use]
    pub const fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// Look up a title once, then sleep for the request delay whatever the outcome.
    ///
    /// Only an HTTP 200 with a parseable body is `Ok`; an OMDb body with
    /// `"Response": "False"` is still `Ok` and is cached like any other answer.
    ///
    /// # Errors
    /// Returns [`OmdbError::Timeout`] when the request times out,
    /// [`OmdbError::HttpStatus`] for any status other than 200,
    /// [`OmdbError::JsonParse`] for an unparseable body, and
    /// [`OmdbError::HttpRequest`] for any other transport failure.
    pub async fn fetch(&self, title: &str, year: Option<i32>) -> Result<MetadataResponse, OmdbError> {
        let result = self.send(title, year).await;
        tokio::time::sleep(self.request_delay).await;
        result
    }

    async fn send(&self, title: &str, year: Option<i32>) -> Result<MetadataResponse, OmdbError> {
        let mut query: Vec<(&str, String)> =
            vec![("t", title.to_owned()), ("apikey", self.api_key.clone())];
        if let Some(year) = year.filter(|&y| y != 0) {
            query.push(("y", year.to_string()));
        }

        let response =
            self.client.get(&self.base_url).query(&query).send().await.map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(OmdbError::HttpStatus { code: status.as_u16() });
        }

        let body = response.text().await.map_err(classify)?;
        serde_json::from_str(&body).map_err(|e| OmdbError::JsonParse {
            context: format!("OMDb response (body: {})", truncate(&body, ERROR_BODY_EXCERPT)),
            source: e,
        })
    }
}

fn classify(err: reqwest::Error) -> OmdbError {
    if err.is_timeout() { OmdbError::Timeout } else { OmdbError::HttpRequest(err) }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
