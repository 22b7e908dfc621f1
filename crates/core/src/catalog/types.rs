//! Types for the movie catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ranking assigned to movies imported from search, meaning "not yet
/// ranked". Large so imported rows sort after every ranked row.
pub const UNRANKED_RANKING: i64 = 99_999;

/// Review text assigned to movies imported from search.
pub const REVIEW_PLACEHOLDER: &str = "No review";

/// A persisted movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned identifier.
    pub id: i64,
    /// Title (unique across the catalog).
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Synopsis.
    pub description: String,
    /// Personal rating, nominally 0-10. The range is enforced at the
    /// add-form boundary only, not by the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Sort key for the list view. Not unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i64>,
    /// Personal review text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    /// Poster image URL.
    pub img_url: String,
}

/// The insert shape of a movie: every field except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    pub img_url: String,
}

impl NewMovie {
    /// Attach a store-assigned id, producing the persisted record.
    pub fn with_id(&self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title.clone(),
            year: self.year,
            description: self.description.clone(),
            rating: self.rating,
            ranking: self.ranking,
            review: self.review.clone(),
            img_url: self.img_url.clone(),
        }
    }
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Movie not found: {0}")]
    NotFound(i64),

    #[error("A movie titled \"{0}\" already exists")]
    DuplicateTitle(String),
}
