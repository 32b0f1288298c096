//! User ratings.

use serde::{Deserialize, Serialize};

use crate::transform::coerce_rating;

/// One row of the ratings CSV (`userId,movieId,rating[,timestamp]`).
///
/// The rating is kept as text so that coercion is an explicit step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRatingRow {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "movieId")]
    pub item_id: i64,
    pub rating: String,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// A rating ready to be appended to the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: i64,
    pub item_id: i64,
    pub rating: f64,
    pub timestamp: Option<i64>,
}

impl Rating {
    /// Returns `None` when the rating value is not numeric.
    #[must_use]
    pub fn from_raw(row: &RawRatingRow) -> Option<Self> {
        let rating = coerce_rating(&row.rating)?;
        Some(Self { user_id: row.user_id, item_id: row.item_id, rating, timestamp: row.timestamp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rating: &str) -> RawRatingRow {
        RawRatingRow { user_id: 1, item_id: 1, rating: rating.to_owned(), timestamp: Some(978_300_760) }
    }

    #[test]
    fn numeric_rating_passes_through() {
        let rating = Rating::from_raw(&raw("4.5")).unwrap();
        assert_eq!(rating.rating, 4.5);
        assert_eq!(rating.timestamp, Some(978_300_760));
    }

    #[test]
    fn non_numeric_rating_is_dropped() {
        assert!(Rating::from_raw(&raw("great")).is_none());
        assert!(Rating::from_raw(&raw("")).is_none());
    }
}
