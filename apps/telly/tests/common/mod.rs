//! Test infrastructure for Telly integration tests.
//!
//! Provides a `TestApp` wrapper around `axum_test::TestServer` backed
//! by a scripted catalog source, so tests control exactly what the
//! upstream returns and can count how often it gets asked.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use axum::{routing::get, Router};
use axum_test::TestServer;

use telly::error::{AppError, Result};
use telly::models::{Episode, Show, ShowStatus};
use telly::services::{Catalog, CatalogSource};
use telly::{config::Config, static_files, views, AppState};

/// Plain-text episode summary longer than the card limit.
pub const LONG_SUMMARY: &str = "A winter storm cuts the valley off from the outside world and \
the station crew must ration fuel while tracking a faint distress signal that drifts closer \
every hour until the night it stops moving right at their fence line.";

/// The fixed catalog served by [`StubSource`]: three shows, exactly
/// one of them a comedy.
pub fn sample_shows() -> Vec<Show> {
    vec![
        Show {
            id: 1,
            name: "Northern Lights".to_string(),
            genres: vec!["Drama".to_string(), "Thriller".to_string()],
            status: ShowStatus::Running,
            rating: Some(8.2),
            runtime: Some(60),
            summary: Some(LONG_SUMMARY.to_string()),
            image: Some("https://example.com/img/show1.jpg".to_string()),
            url: "https://example.com/shows/1".to_string(),
        },
        Show {
            id: 2,
            name: "Harbor Nights".to_string(),
            genres: vec!["Comedy".to_string()],
            status: ShowStatus::Running,
            rating: Some(7.1),
            runtime: Some(30),
            summary: Some("<p>A lighthearted look at dockside life.</p>".to_string()),
            image: None,
            url: "https://example.com/shows/2".to_string(),
        },
        Show {
            id: 3,
            name: "Silent Signal".to_string(),
            genres: vec!["Science-Fiction".to_string()],
            status: ShowStatus::Ended,
            rating: Some(8.9),
            runtime: Some(45),
            summary: None,
            image: Some("https://example.com/img/show3.jpg".to_string()),
            url: "https://example.com/shows/3".to_string(),
        },
    ]
}

/// Episodes of show 1. Covers the card edge cases: a short summary,
/// a missing summary and image, and a summary past the card limit.
pub fn sample_episodes() -> Vec<Episode> {
    vec![
        Episode {
            season: 1,
            number: 1,
            name: "First Light".to_string(),
            summary: Some("<p>The crew arrives at the line camp.</p>".to_string()),
            image: Some("https://example.com/img/ep101.jpg".to_string()),
            url: "https://example.com/episodes/101".to_string(),
        },
        Episode {
            season: 1,
            number: 2,
            name: "Dead Air".to_string(),
            summary: None,
            image: None,
            url: "https://example.com/episodes/102".to_string(),
        },
        Episode {
            season: 2,
            number: 7,
            name: "The Long Dark".to_string(),
            summary: Some(LONG_SUMMARY.to_string()),
            image: Some("https://example.com/img/ep203.jpg".to_string()),
            url: "https://example.com/episodes/103".to_string(),
        },
    ]
}

/// Scripted catalog source with call counters.
pub struct StubSource {
    show_calls: AtomicUsize,
    episode_calls: AtomicUsize,
    fail_shows: bool,
    fail_episodes: bool,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            show_calls: AtomicUsize::new(0),
            episode_calls: AtomicUsize::new(0),
            fail_shows: false,
            fail_episodes: false,
        }
    }

    /// A source whose show listing request always fails.
    #[allow(dead_code)]
    pub fn failing_shows() -> Self {
        Self {
            fail_shows: true,
            ..Self::new()
        }
    }

    /// A source whose episode requests always fail.
    #[allow(dead_code)]
    pub fn failing_episodes() -> Self {
        Self {
            fail_episodes: true,
            ..Self::new()
        }
    }

    /// How many times the show listing has been fetched.
    #[allow(dead_code)]
    pub fn show_calls(&self) -> usize {
        self.show_calls.load(Ordering::SeqCst)
    }

    /// How many times any episode list has been fetched.
    #[allow(dead_code)]
    pub fn episode_calls(&self) -> usize {
        self.episode_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StubSource {
    async fn fetch_shows(&self) -> Result<Vec<Show>> {
        self.show_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_shows {
            return Err(AppError::Catalog("catalog offline".to_string()));
        }
        Ok(sample_shows())
    }

    async fn fetch_episodes(&self, show_id: i64) -> Result<Vec<Episode>> {
        self.episode_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_episodes {
            return Err(AppError::Catalog("catalog offline".to_string()));
        }
        Ok(match show_id {
            1 => sample_episodes(),
            _ => vec![Episode {
                season: 1,
                number: 1,
                name: "Pilot".to_string(),
                summary: None,
                image: None,
                url: format!("https://example.com/episodes/{}01", show_id),
            }],
        })
    }
}

/// Test application wrapper around axum_test::TestServer.
pub struct TestApp {
    server: TestServer,
    source: Arc<StubSource>,
}

impl TestApp {
    /// Create a test application backed by the default stub catalog.
    pub fn new() -> Self {
        Self::with_source(StubSource::new())
    }

    /// Create a test application with a custom catalog source.
    pub fn with_source(source: StubSource) -> Self {
        let source = Arc::new(source);

        let config = Config {
            server: telly::config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            tvmaze: Default::default(),
        };

        let state = AppState {
            config: Arc::new(config),
            catalog: Catalog::new_shared(source.clone()),
        };

        let app = Self::build_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, source }
    }

    /// Build the complete application router.
    ///
    /// This mirrors the router construction in main.rs to ensure
    /// integration tests run against the actual production routes.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/static/*path", get(static_files::serve_static))
            .route("/health", get(telly::health_check))
            .merge(views::routes())
            .fallback(views::not_found)
            .with_state(state)
    }

    /// Get a reference to the test server.
    ///
    /// Use this to make HTTP requests:
    /// ```ignore
    /// let response = app.server().get("/shows").await;
    /// ```
    pub fn server(&self) -> &TestServer {
        &self.server
    }

    /// Get a reference to the stub catalog source, to inspect call
    /// counters.
    #[allow(dead_code)]
    pub fn source(&self) -> &StubSource {
        &self.source
    }

    /// Issue a GET request marked as coming from htmx.
    #[allow(dead_code)]
    pub async fn get_htmx(&self, path: &str) -> axum_test::TestResponse {
        self.server
            .get(path)
            .add_header(
                HeaderName::from_static("hx-request"),
                HeaderValue::from_static("true"),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_creation() {
        let app = TestApp::new();
        assert_eq!(app.source().show_calls(), 0);
    }

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let app = TestApp::new();
        let response = app.server().get("/health").await;

        response.assert_status_ok();
        response.assert_json_contains(&serde_json::json!({
            "message": "Telly is running"
        }));
    }
}
