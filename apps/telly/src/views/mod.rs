//! HTML views for the htmx frontend.
//!
//! Route handlers render Askama templates. Plain requests get full
//! pages, htmx requests get the fragment they asked for.

pub mod episodes;
pub mod shows;
pub mod state;
pub mod utils;

use askama::Template;
use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::AppState;

/// One entry of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Template)]
#[template(path = "pages/404.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

/// Full page shown when the catalog cannot be loaded at all.
#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorPageTemplate {
    pub message: String,
}

/// 404 handler
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            path: uri.path().to_string(),
        },
    )
}

/// Build the HTML routes for the frontend
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shows::browse))
        .route("/shows", get(shows::browse))
        .route("/shows/:id/episodes", get(episodes::browse))
}
