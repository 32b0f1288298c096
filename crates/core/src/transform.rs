//! Pure normalization rules applied to raw catalog and rating cells.
//!
//! None of these functions fail: malformed input degrades to a fallback value
//! (raw title, empty genre list, dropped rating) instead of an error.

use crate::constants::NO_GENRES_SENTINEL;

/// Split a composite title such as `"Heat (1995)"` into `("Heat", Some(1995))`.
///
/// Any trailing parenthetical is removed from the title; it only becomes the
/// year when it consists of ASCII digits. A digit run too large for a year
/// falls back to the unmodified input with no year.
#[must_use]
pub fn parse_title_and_year(raw: &str) -> (String, Option<i32>) {
    let Some(body) = raw.strip_suffix(')') else {
        return (raw.to_owned(), None);
    };
    let Some(open) = body.rfind('(') else {
        return (raw.to_owned(), None);
    };

    let suffix = &body[open + 1..];
    let title = body[..open].trim().to_owned();

    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return (title, None);
    }
    match suffix.parse::<i32>() {
        Ok(year) => (title, Some(year)),
        Err(_) => (raw.to_owned(), None),
    }
}

/// Split a pipe-delimited genre cell into trimmed, non-empty names.
#[must_use]
pub fn split_genres(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let raw = raw.trim();
    if raw.is_empty() || raw == NO_GENRES_SENTINEL {
        return Vec::new();
    }
    raw.split('|').map(str::trim).filter(|g| !g.is_empty()).map(str::to_owned).collect()
}

/// Numeric coercion of a rating cell. Non-numeric and non-finite values yield `None`.
#[must_use]
pub fn coerce_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
