//! Telly library
//!
//! Core functionality for the Telly TV catalog browser. This library
//! exposes modules for use in integration tests.

use axum::response::Json;
use serde::Serialize;
use std::sync::Arc;

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod response;
pub mod services;
pub mod static_files;
pub mod views;

use config::Config;
use services::Catalog;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the catalog cache.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[derive(Serialize)]
pub struct ApiResponse {
    pub message: String,
    pub version: String,
}

pub async fn health_check() -> Json<ApiResponse> {
    Json(ApiResponse {
        message: "Telly is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
