//! Movie metadata lookup against TMDB.
//!
//! Two stateless outbound operations: title search and detail lookup.
//! Responses are translated into typed values; nothing is cached
//! locally.

mod tmdb;
mod types;

pub use tmdb::{TmdbClient, TmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying the metadata service.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Movie not found (404).
    #[error("Movie not found: {0}")]
    NotFound(u64),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// An expected field was absent from the response.
    #[error("Response is missing field: {0}")]
    MissingField(&'static str),

    /// Client not configured (missing credential, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for the metadata service client.
///
/// Implemented by [`TmdbClient`] and by the mock in
/// [`crate::testing`], so handlers can be exercised without the
/// network.
#[async_trait]
pub trait MovieMetadata: Send + Sync {
    /// Search for movies by title.
    ///
    /// Returns the service's result list in service order; zero results
    /// is an empty vec, not an error.
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, MetadataError>;

    /// Fetch the detail record for one movie.
    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, MetadataError>;

    /// Build a full poster image URL from a poster path.
    fn image_url(&self, poster_path: &str) -> String;
}
