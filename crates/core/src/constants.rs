//! Shared constants for cinedb.
//!
//! Defaults used by the CLI, the metadata client and the query runner.

/// Database URL used when `--db` is not given.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///movies.db";

/// Database path used by the reporting commands when `--db` is not given.
pub const DEFAULT_DATABASE_PATH: &str = "movies.db";

/// SQL script read by `cinedb query` when `--sql-file` is not given.
pub const DEFAULT_SQL_FILE: &str = "queries.sql";

/// Response cache location, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = "omdb_cache.json";

/// OMDb endpoint. Queried with `t`, `apikey` and optional `y` parameters.
pub const OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

/// Per-request timeout for metadata lookups.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Courtesy pause after every remote lookup, whatever its outcome.
pub const REQUEST_DELAY_MS: u64 = 300;

/// Genre cell value meaning "no genres".
pub const NO_GENRES_SENTINEL: &str = "(no genres listed)";

/// Maximum rows printed per statement by the query runner.
pub const REPORT_ROW_LIMIT: usize = 10;

/// Words of each statement shown in the query runner's preview line.
pub const STATEMENT_PREVIEW_WORDS: usize = 10;
