//! Mock metadata service for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::metadata::{MetadataError, MovieDetail, MovieMetadata, MovieSummary};

/// A recorded metadata query for test assertions.
#[derive(Debug, Clone)]
pub enum RecordedQuery {
    SearchMovies { query: String },
    MovieDetail { id: u64 },
}

/// Mock implementation of the [`MovieMetadata`] trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable search results and detail records
/// - Track queries for assertions
/// - Simulate failures
pub struct MockMetadata {
    /// Search results, returned in insertion order for any query.
    results: Arc<RwLock<Vec<MovieSummary>>>,
    /// Detail records by id.
    details: Arc<RwLock<HashMap<u64, MovieDetail>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<MetadataError>>>,
    /// Image base used by [`MovieMetadata::image_url`].
    image_base_url: String,
}

impl Default for MockMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMetadata {
    /// Create a new empty mock.
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            details: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        }
    }

    /// Set the search results returned for any query.
    pub async fn set_results(&self, results: Vec<MovieSummary>) {
        *self.results.write().await = results;
    }

    /// Add a detail record.
    pub async fn add_detail(&self, id: u64, detail: MovieDetail) {
        self.details.write().await.insert(id, detail);
    }

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: MetadataError) {
        *self.next_error.write().await = Some(error);
    }

    async fn take_error(&self) -> Option<MetadataError> {
        self.next_error.write().await.take()
    }

    async fn record(&self, query: RecordedQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl MovieMetadata for MockMetadata {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, MetadataError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::SearchMovies {
            query: query.to_string(),
        })
        .await;

        Ok(self.results.read().await.clone())
    }

    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, MetadataError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedQuery::MovieDetail { id }).await;

        self.details
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(MetadataError::NotFound(id))
    }

    fn image_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_base_url, poster_path)
    }
}
