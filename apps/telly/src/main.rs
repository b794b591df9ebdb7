use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use telly::services::{Catalog, TvMazeClient};
use telly::{config::Config, static_files, views, AppState};

fn init_tracing() {
    // Initialize tracing with env-filter
    // RUST_LOG environment variable controls log levels
    // Default: debug for our crate, info for axum, warn for dependencies
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("telly=debug,tower_http=debug,axum=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    // Initialize tracing first so we can log configuration loading
    init_tracing();

    tracing::info!("Starting Telly v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match Config::load() {
        Ok(cfg) => {
            tracing::info!("Configuration loaded successfully");
            tracing::debug!("Server: {}:{}", cfg.server.host, cfg.server.port);
            tracing::debug!("Catalog: {}", cfg.tvmaze.base_url);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Create the catalog client
    let client = match TvMazeClient::new_shared(&config.tvmaze.base_url, &config.tvmaze.user_agent())
    {
        Ok(client) => {
            tracing::info!("TVMaze client initialized");
            client
        }
        Err(e) => {
            tracing::error!("Failed to create TVMaze client: {}", e);
            std::process::exit(1);
        }
    };

    // Wrap it in the caching catalog
    let catalog = Catalog::new_shared(client);

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog,
    };

    // Build main router with state
    let app = Router::new()
        // Static assets (CSS, images)
        .route("/static/*path", get(static_files::serve_static))
        // Health check
        .route("/health", get(telly::health_check))
        // HTMX HTML routes (served at root)
        .merge(views::routes())
        // 404 fallback
        .fallback(views::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.server_addr();
    tracing::info!("Telly listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
