//! Testing utilities and mock implementations.
//!
//! Provides a mock of the metadata service trait so page handlers can
//! be exercised without the network.

mod mock_metadata;

pub use mock_metadata::MockMetadata;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::NewMovie;
    use crate::metadata::{MovieDetail, MovieSummary};

    /// Create a catalog insert shape with reasonable defaults.
    pub fn new_movie(title: &str, ranking: i64) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            year: 2002,
            description: format!("A movie about {}.", title.to_lowercase()),
            rating: Some(7.0),
            ranking: Some(ranking),
            review: Some("Seen it twice.".to_string()),
            img_url: "https://image.tmdb.org/t/p/w500/poster.jpg".to_string(),
        }
    }

    /// Create a search result entry.
    pub fn movie_summary(id: u64, title: &str, year: u32) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            release_date: Some(format!("{}-06-15", year)),
            overview: Some(format!("A movie about {}.", title.to_lowercase())),
        }
    }

    /// Create a detail record.
    pub fn movie_detail(title: &str, year: u32) -> MovieDetail {
        MovieDetail {
            title: title.to_string(),
            release_date: format!("{}-06-15", year),
            overview: format!("A movie about {}.", title.to_lowercase()),
            poster_path: "/poster.jpg".to_string(),
        }
    }
}
