//! Types for metadata service responses.

use serde::{Deserialize, Serialize};

/// One entry of a title search response. Ephemeral - only passed
/// through to the selection view, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// The service's identifier for the movie.
    pub id: u64,
    /// Movie title.
    pub title: String,
    /// Release date (YYYY-MM-DD), when the service knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Synopsis, when the service has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
}

/// The detail record for one movie: exactly the fields the catalog
/// consumes on import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Movie title.
    pub title: String,
    /// Release date (YYYY-MM-DD).
    pub release_date: String,
    /// Synopsis.
    pub overview: String,
    /// Poster path, relative to the image base URL.
    pub poster_path: String,
}

impl MovieDetail {
    /// Release year, parsed from the leading segment of the release date.
    pub fn year(&self) -> Option<i32> {
        self.release_date
            .split('-')
            .next()
            .and_then(|y| y.parse().ok())
    }
}
