//! Environment variable parsing with warn-level logging for invalid values.

/// Overrides the OMDb endpoint.
pub const ENV_OMDB_URL: &str = "CINEDB_OMDB_URL";
/// Overrides the per-request timeout, in seconds.
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CINEDB_HTTP_TIMEOUT_SECS";
/// Overrides the post-request delay, in milliseconds.
pub const ENV_REQUEST_DELAY_MS: &str = "CINEDB_REQUEST_DELAY_MS";

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a string environment variable, treating empty values as unset.
#[must_use]
pub fn env_string(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
