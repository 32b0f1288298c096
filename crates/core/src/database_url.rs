use std::path::PathBuf;

use crate::error::{CoreError, Result};

const SQLITE_PREFIX: &str = "sqlite:///";

/// Resolve a database connection string to a SQLite file path.
///
/// Accepts `sqlite:///relative.db`, `sqlite:////absolute.db` and bare paths.
/// Other schemes are rejected since the store is SQLite only.
pub fn sqlite_path_from_url(url: &str) -> Result<PathBuf> {
    let url = url.trim();
    if let Some(path) = url.strip_prefix(SQLITE_PREFIX) {
        if path.is_empty() {
            return Err(CoreError::InvalidDatabaseUrl(format!("{url} (missing file path)")));
        }
        return Ok(PathBuf::from(path));
    }
    if let Some((scheme, _)) = url.split_once("://") {
        if scheme == "sqlite" {
            return Err(CoreError::InvalidDatabaseUrl(format!(
                "{url} (expected sqlite:///<path>)"
            )));
        }
        return Err(CoreError::UnsupportedDatabase(scheme.to_owned()));
    }
    if url.is_empty() {
        return Err(CoreError::InvalidDatabaseUrl("empty database URL".to_owned()));
    }
    Ok(PathBuf::from(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_sqlite_url() {
        assert_eq!(sqlite_path_from_url("sqlite:///movies.db").unwrap(), PathBuf::from("movies.db"));
    }

    #[test]
    fn absolute_sqlite_url() {
        assert_eq!(
            sqlite_path_from_url("sqlite:////var/lib/cinedb/movies.db").unwrap(),
            PathBuf::from("/var/lib/cinedb/movies.db")
        );
    }

    #[test]
    fn bare_path_is_accepted() {
        assert_eq!(sqlite_path_from_url("data/movies.db").unwrap(), PathBuf::from("data/movies.db"));
    }

    #[test]
    fn other_schemes_are_rejected() {
        let err = sqlite_path_from_url("postgres://localhost/movies").unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedDatabase(ref s) if s == "postgres"));
    }

    #[test]
    fn sqlite_url_without_path_is_rejected() {
        assert!(matches!(
            sqlite_path_from_url("sqlite:///"),
            Err(CoreError::InvalidDatabaseUrl(_))
        ));
        assert!(matches!(
            sqlite_path_from_url("sqlite://movies.db"),
            Err(CoreError::InvalidDatabaseUrl(_))
        ));
    }
}
