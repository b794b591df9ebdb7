//! TVMaze catalog client.
//!
//! Fetches show and episode listings from the TVMaze public API.
//! TVMaze requires no API key, just a descriptive User-Agent. Each call
//! is a single attempt; there are no retries.

use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::{Episode, Show, ShowStatus};

const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// TVMaze Client
// =============================================================================

/// HTTP client for the TVMaze catalog API.
pub struct TvMazeClient {
    client: Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new TVMaze client.
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. "https://api.tvmaze.com"
    /// * `user_agent` - User-Agent header value, e.g. "telly/0.1.0"
    ///
    /// # Errors
    /// Returns an error if either argument is empty or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(AppError::Internal(
                "TVMaze base URL cannot be empty".to_string(),
            ));
        }

        if user_agent.trim().is_empty() {
            return Err(AppError::Internal(
                "TVMaze user agent cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new TVMaze client wrapped in Arc for shared access.
    pub fn new_shared(base_url: &str, user_agent: &str) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::new(base_url, user_agent)?))
    }

    /// Fetch the show catalog (the API's first listing page).
    pub async fn shows(&self) -> Result<Vec<Show>> {
        tracing::debug!("Fetching TVMaze show catalog");

        let raw: Vec<TvMazeShow> = self.get_json("/shows").await?;
        Ok(raw.into_iter().map(Show::from).collect())
    }

    /// Fetch all episodes of one show.
    ///
    /// Specials without an episode number are skipped since they cannot
    /// form an "SxxExx" code.
    pub async fn episodes(&self, show_id: i64) -> Result<Vec<Episode>> {
        tracing::debug!(show_id, "Fetching TVMaze episodes");

        let raw: Vec<TvMazeEpisode> = self
            .get_json(&format!("/shows/{}/episodes", show_id))
            .await?;
        Ok(raw.into_iter().filter_map(TvMazeEpisode::into_episode).collect())
    }

    /// Internal helper to perform a GET request and deserialize the JSON body.
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Catalog(format!("request to {} failed: {}", path, e)))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("catalog resource {}", path)));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::Catalog(
                "TVMaze rate limit exceeded, please try again later".to_string(),
            ));
        }

        if !status.is_success() {
            return Err(AppError::Catalog(format!(
                "TVMaze {} returned error status: {}",
                path, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::Catalog(format!("failed to parse response from {}: {}", path, e))
        })
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Show record as returned by the TVMaze API.
#[derive(Debug, Deserialize)]
struct TvMazeShow {
    id: i64,
    name: String,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    status: String,
    rating: Option<TvMazeRating>,
    runtime: Option<u32>,
    image: Option<TvMazeImage>,
    summary: Option<String>,
    url: String,
}

#[derive(Debug, Deserialize)]
struct TvMazeRating {
    average: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TvMazeImage {
    medium: Option<String>,
    original: Option<String>,
}

impl TvMazeImage {
    /// Card-sized image URL, falling back to the original when the
    /// medium variant is missing.
    fn card_url(self) -> Option<String> {
        self.medium.or(self.original)
    }
}

impl From<TvMazeShow> for Show {
    fn from(raw: TvMazeShow) -> Self {
        Show {
            id: raw.id,
            name: raw.name,
            genres: raw.genres,
            status: ShowStatus::parse(&raw.status),
            rating: raw.rating.and_then(|r| r.average),
            runtime: raw.runtime,
            summary: raw.summary,
            image: raw.image.and_then(TvMazeImage::card_url),
            url: raw.url,
        }
    }
}

/// Episode record as returned by the TVMaze API.
///
/// `number` is null for specials, which have no place in a numbered
/// episode list.
#[derive(Debug, Deserialize)]
struct TvMazeEpisode {
    name: String,
    season: u32,
    number: Option<u32>,
    image: Option<TvMazeImage>,
    summary: Option<String>,
    url: String,
}

impl TvMazeEpisode {
    fn into_episode(self) -> Option<Episode> {
        let number = self.number?;
        Some(Episode {
            season: self.season,
            number,
            name: self.name,
            summary: self.summary,
            image: self.image.and_then(TvMazeImage::card_url),
            url: self.url,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
