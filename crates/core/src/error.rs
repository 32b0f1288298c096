use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur in cinedb core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedDatabase(String),

    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),
}

pub type Result<T> = StdResult<T, CoreError>;
