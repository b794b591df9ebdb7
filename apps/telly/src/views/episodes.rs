//! Episode views - the per-show browse level

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::Episode;
use crate::response::ContentNegotiation;
use crate::AppState;

use super::state::{ListFilter, ALL};
use super::utils::{summary_snippet, Snippet, PLACEHOLDER_IMAGE};
use super::{ErrorPageTemplate, SelectOption};

#[derive(Template)]
#[template(path = "pages/show_episodes.html")]
pub struct EpisodesPageTemplate {
    pub show_id: i64,
    pub show_name: String,
    pub cards: Vec<EpisodeCard>,
    pub total: usize,
    pub options: Vec<SelectOption>,
    pub query: String,
    pub selected: String,
    pub reset_select: bool,
    pub reset_search: bool,
}

#[derive(Template)]
#[template(path = "partials/episodes_browser.html")]
pub struct EpisodesBrowserTemplate {
    pub show_id: i64,
    pub show_name: String,
    pub cards: Vec<EpisodeCard>,
    pub total: usize,
    pub options: Vec<SelectOption>,
    pub query: String,
    pub selected: String,
    pub reset_select: bool,
    pub reset_search: bool,
}

#[derive(Template)]
#[template(path = "partials/episodes_content.html")]
pub struct EpisodesContentTemplate {
    pub show_id: i64,
    pub cards: Vec<EpisodeCard>,
    pub total: usize,
    pub options: Vec<SelectOption>,
    pub reset_select: bool,
    pub reset_search: bool,
}

pub struct EpisodeCard {
    pub title: String,
    pub image: String,
    pub summary: Snippet,
    pub url: String,
}

#[derive(Deserialize)]
pub struct BrowseQuery {
    pub q: Option<String>,
    pub episode: Option<String>,
}

/// Browse the episodes of one show.
///
/// The dropdown narrows to a single episode by its code; the search
/// box matches free text. Whichever control fires resets the other
/// one out of band.
pub async fn browse(
    State(state): State<AppState>,
    Path(show_id): Path<i64>,
    headers: HeaderMap,
    Query(query): Query<BrowseQuery>,
) -> Response {
    let filter = ListFilter::resolve(query.q.as_deref(), query.episode.as_deref());

    if !headers.is_htmx() {
        return page(&state, show_id, filter).await;
    }
    if query.q.is_none() && query.episode.is_none() {
        return browser(&state, show_id).await;
    }

    let reset_select = query.episode.is_none();
    let reset_search = query.episode.is_some();
    content(&state, show_id, filter, reset_select, reset_search).await
}

/// The episode browser fragment for a freshly selected show, used by
/// the shows level when the dropdown switches the client over.
pub async fn browser_for(state: &AppState, show_id: i64) -> Result<EpisodesBrowserTemplate> {
    let (show_name, episodes) = load(state, show_id).await?;
    Ok(EpisodesBrowserTemplate {
        show_id,
        show_name,
        cards: cards_for(&episodes, &ListFilter::All),
        total: episodes.len(),
        options: episode_options(&episodes),
        query: String::new(),
        selected: ALL.to_string(),
        reset_select: false,
        reset_search: false,
    })
}

async fn load(state: &AppState, show_id: i64) -> Result<(String, Arc<Vec<Episode>>)> {
    let show = state.catalog.show(show_id).await?;
    let episodes = state.catalog.episodes(show_id).await?;
    Ok((show.name, episodes))
}

async fn page(state: &AppState, show_id: i64, filter: ListFilter) -> Response {
    match load(state, show_id).await {
        Ok((show_name, episodes)) => EpisodesPageTemplate {
            show_id,
            show_name,
            cards: cards_for(&episodes, &filter),
            total: episodes.len(),
            options: episode_options(&episodes),
            query: filter.search_term().to_string(),
            selected: filter.selected_key().to_string(),
            reset_select: false,
            reset_search: false,
        }
        .into_response(),
        Err(AppError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            ErrorPageTemplate {
                message: "Show not found.".to_string(),
            },
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, show_id, "Failed to load episodes");
            (
                StatusCode::BAD_GATEWAY,
                ErrorPageTemplate {
                    message:
                        "Failed to load episodes from the catalog service. Please try again later."
                            .to_string(),
                },
            )
                .into_response()
        }
    }
}

async fn browser(state: &AppState, show_id: i64) -> Response {
    match browser_for(state, show_id).await {
        Ok(template) => template.into_response(),
        Err(err @ AppError::NotFound(_)) => err.into_response(),
        Err(err) => {
            tracing::error!(error = %err, show_id, "Failed to load episodes");
            Html("<div class='telly-error'>Failed to load episodes</div>").into_response()
        }
    }
}

async fn content(
    state: &AppState,
    show_id: i64,
    filter: ListFilter,
    reset_select: bool,
    reset_search: bool,
) -> Response {
    match load(state, show_id).await {
        Ok((_, episodes)) => EpisodesContentTemplate {
            show_id,
            cards: cards_for(&episodes, &filter),
            total: episodes.len(),
            options: episode_options(&episodes),
            reset_select,
            reset_search,
        }
        .into_response(),
        Err(err @ AppError::NotFound(_)) => err.into_response(),
        Err(err) => {
            tracing::error!(error = %err, show_id, "Failed to load episodes");
            Html("<div class='telly-error'>Failed to load episodes</div>").into_response()
        }
    }
}

fn cards_for(episodes: &[Episode], filter: &ListFilter) -> Vec<EpisodeCard> {
    filter
        .apply(episodes, |e| e.code())
        .into_iter()
        .map(episode_card)
        .collect()
}

pub fn episode_card(episode: &Episode) -> EpisodeCard {
    EpisodeCard {
        title: format!("{} - {}", episode.code(), episode.name),
        image: episode
            .image
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        summary: summary_snippet(episode.summary.as_deref()),
        url: episode.url.clone(),
    }
}

fn episode_options(episodes: &[Episode]) -> Vec<SelectOption> {
    episodes
        .iter()
        .map(|e| SelectOption {
            value: e.code(),
            label: format!("{} - {}", e.code(), e.name),
        })
        .collect()
}
