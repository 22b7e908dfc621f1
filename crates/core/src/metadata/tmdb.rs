//! TMDB (The Movie Database) API client.
//!
//! Authenticates every request with a static credential sent in the
//! Authorization header. Requests carry no timeout and are never
//! retried; an outbound call blocks its handler until the service
//! responds or the connection fails.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{MovieDetail, MovieSummary};
use super::{MetadataError, MovieMetadata};

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API read access token, including the "Bearer " prefix
    /// (sent verbatim as the Authorization header).
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Image base URL for posters (default: https://image.tmdb.org/t/p/w500).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    image_base_url: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, MetadataError> {
        if config.api_key.is_empty() {
            return Err(MetadataError::NotConfigured(
                "TMDB credential is required".to_string(),
            ));
        }

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://api.themoviedb.org/3".to_string());

        let image_base_url = config
            .image_base_url
            .unwrap_or_else(|| "https://image.tmdb.org/t/p/w500".to_string());

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: config.api_key,
            image_base_url,
        })
    }
}

#[async_trait]
impl MovieMetadata for TmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, MetadataError> {
        let url = format!("{}/search/movie", self.base_url);

        debug!("TMDB movie search: query='{}'", query);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.api_key)
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(MetadataError::NotConfigured(
                "Invalid TMDB credential".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_result: TmdbSearchResponse = response.json().await.map_err(|e| {
            MetadataError::Parse(format!("Failed to parse movie search response: {}", e))
        })?;

        // Service order is preserved; zero results is just an empty list.
        let movies = search_result
            .results
            .into_iter()
            .map(|r| r.into())
            .collect();

        Ok(movies)
    }

    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, MetadataError> {
        let url = format!("{}/movie/{}", self.base_url, id);

        debug!("TMDB movie detail: id={}", id);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(MetadataError::NotConfigured(
                "Invalid TMDB credential".to_string(),
            ));
        }
        if status == 404 {
            return Err(MetadataError::NotFound(id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let details: TmdbMovieDetails = response.json().await.map_err(|e| {
            MetadataError::Parse(format!("Failed to parse movie detail response: {}", e))
        })?;

        details.try_into()
    }

    fn image_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_base_url, poster_path)
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<TmdbSearchResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbSearchResult {
    id: u64,
    title: String,
    release_date: Option<String>,
    overview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieDetails {
    title: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<TmdbSearchResult> for MovieSummary {
    fn from(r: TmdbSearchResult) -> Self {
        Self {
            id: r.id,
            title: r.title,
            release_date: r.release_date,
            overview: r.overview,
        }
    }
}

impl TryFrom<TmdbMovieDetails> for MovieDetail {
    type Error = MetadataError;

    // Every consumed field must be present; anything absent is an
    // explicit MissingField instead of a fault downstream.
    fn try_from(d: TmdbMovieDetails) -> Result<Self, MetadataError> {
        Ok(Self {
            title: d.title.ok_or(MetadataError::MissingField("title"))?,
            release_date: d
                .release_date
                .ok_or(MetadataError::MissingField("release_date"))?,
            overview: d.overview.ok_or(MetadataError::MissingField("overview"))?,
            poster_path: d
                .poster_path
                .ok_or(MetadataError::MissingField("poster_path"))?,
        })
    }
}
