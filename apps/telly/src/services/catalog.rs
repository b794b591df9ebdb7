//! Catalog access with in-process caching.
//!
//! `CatalogSource` is the seam between the browsing logic and the
//! network: the real implementation is [`TvMazeClient`], tests provide
//! stubs. [`Catalog`] wraps a source and remembers everything it has
//! fetched, so filters re-evaluate against loaded data instead of
//! refetching.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::models::{Episode, Show};
use crate::services::tvmaze::TvMazeClient;

/// Read access to the upstream catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the show listing. Single attempt, no retries.
    async fn fetch_shows(&self) -> Result<Vec<Show>>;

    /// Fetch all episodes of one show. Single attempt, no retries.
    async fn fetch_episodes(&self, show_id: i64) -> Result<Vec<Episode>>;
}

#[async_trait]
impl CatalogSource for TvMazeClient {
    async fn fetch_shows(&self) -> Result<Vec<Show>> {
        self.shows().await
    }

    async fn fetch_episodes(&self, show_id: i64) -> Result<Vec<Episode>> {
        self.episodes(show_id).await
    }
}

/// Caching front over a [`CatalogSource`].
///
/// The show listing is fetched once and kept for the process lifetime.
/// Episode lists are fetched lazily per show and never evicted. Failed
/// fetches are not cached; the next request tries again.
pub struct Catalog {
    source: Arc<dyn CatalogSource>,
    shows: RwLock<Option<Arc<Vec<Show>>>>,
    episodes: RwLock<HashMap<i64, Arc<Vec<Episode>>>>,
}

impl Catalog {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            shows: RwLock::new(None),
            episodes: RwLock::new(HashMap::new()),
        }
    }

    pub fn new_shared(source: Arc<dyn CatalogSource>) -> Arc<Self> {
        Arc::new(Self::new(source))
    }

    /// The show listing, fetched on first use.
    pub async fn shows(&self) -> Result<Arc<Vec<Show>>> {
        if let Some(list) = self.shows.read().await.as_ref() {
            return Ok(Arc::clone(list));
        }

        // No lock is held across the fetch, so concurrent callers may
        // fetch in duplicate. The first stored response wins and the
        // duplicates are discarded.
        let fetched = Arc::new(self.source.fetch_shows().await?);
        tracing::info!(count = fetched.len(), "Loaded show catalog");

        let mut slot = self.shows.write().await;
        Ok(Arc::clone(slot.get_or_insert(fetched)))
    }

    /// Look up one show in the cached listing.
    pub async fn show(&self, show_id: i64) -> Result<Show> {
        self.shows()
            .await?
            .iter()
            .find(|s| s.id == show_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("show {}", show_id)))
    }

    /// The episode list for one show, fetched on first selection.
    pub async fn episodes(&self, show_id: i64) -> Result<Arc<Vec<Episode>>> {
        if let Some(list) = self.episodes.read().await.get(&show_id) {
            tracing::debug!(show_id, "Episode cache hit");
            return Ok(Arc::clone(list));
        }

        // Same first-response-wins policy as the show listing.
        let fetched = Arc::new(self.source.fetch_episodes(show_id).await?);
        tracing::info!(show_id, count = fetched.len(), "Loaded episodes");

        let mut map = self.episodes.write().await;
        Ok(Arc::clone(map.entry(show_id).or_insert(fetched)))
    }
}
