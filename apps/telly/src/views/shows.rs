//! Shows views - the top browse level

use askama::Template;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::Show;
use crate::response::ContentNegotiation;
use crate::AppState;

use super::episodes;
use super::state::{BrowseLevel, ListFilter, ALL};
use super::utils::{summary_snippet, Snippet, PLACEHOLDER_IMAGE};
use super::{ErrorPageTemplate, SelectOption};

#[derive(Template)]
#[template(path = "pages/shows_list.html")]
pub struct ShowsPageTemplate {
    pub cards: Vec<ShowCard>,
    pub total: usize,
    pub options: Vec<SelectOption>,
    pub query: String,
    pub reset_select: bool,
}

#[derive(Template)]
#[template(path = "partials/shows_browser.html")]
pub struct ShowsBrowserTemplate {
    pub cards: Vec<ShowCard>,
    pub total: usize,
    pub options: Vec<SelectOption>,
    pub query: String,
    pub reset_select: bool,
}

#[derive(Template)]
#[template(path = "partials/shows_content.html")]
pub struct ShowsContentTemplate {
    pub cards: Vec<ShowCard>,
    pub total: usize,
    pub options: Vec<SelectOption>,
    pub reset_select: bool,
}

pub struct ShowCard {
    pub title: String,
    pub image: String,
    pub summary: Snippet,
    pub meta: String,
    pub url: String,
}

#[derive(Deserialize)]
pub struct BrowseQuery {
    pub q: Option<String>,
    pub show: Option<String>,
}

/// Browse the show catalog.
///
/// Dispatch follows which control issued the request: a concrete
/// dropdown value drills into that show, the neutral value rebuilds
/// the level, a search term re-renders the card list. Requests
/// without the htmx marker get the full page.
pub async fn browse(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BrowseQuery>,
) -> Response {
    match query.show.as_deref() {
        Some(value) if !value.is_empty() && value != ALL => {
            select_show(&state, &headers, value).await
        }
        Some(_) => {
            // Dropdown back to "All Shows": rebuild the level with a
            // fresh search box
            if headers.is_htmx() {
                with_push_url(browser(&state).await, BrowseLevel::AllShows)
            } else {
                page(&state, ListFilter::All).await
            }
        }
        None => {
            let filter = ListFilter::resolve(query.q.as_deref(), None);
            if !headers.is_htmx() {
                page(&state, filter).await
            } else if query.q.is_some() {
                content(&state, filter).await
            } else {
                browser(&state).await
            }
        }
    }
}

/// Switch to the episodes level of one show.
async fn select_show(state: &AppState, headers: &HeaderMap, value: &str) -> Response {
    let show_id = match value.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return AppError::BadRequest(format!("invalid show id: {}", value)).into_response()
        }
    };

    let level = BrowseLevel::ShowEpisodes(show_id);
    if !headers.is_htmx() {
        return Redirect::to(&level.path()).into_response();
    }

    match episodes::browser_for(state, show_id).await {
        Ok(template) => with_push_url(template.into_response(), level),
        Err(err @ AppError::NotFound(_)) => err.into_response(),
        Err(err) => {
            tracing::error!(error = %err, show_id, "Failed to open show");
            Html("<div class='telly-error'>Failed to load episodes</div>").into_response()
        }
    }
}

async fn page(state: &AppState, filter: ListFilter) -> Response {
    match state.catalog.shows().await {
        Ok(shows) => ShowsPageTemplate {
            cards: cards_for(&shows, &filter),
            total: shows.len(),
            options: show_options(&shows),
            query: filter.search_term().to_string(),
            reset_select: false,
        }
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load shows");
            (
                StatusCode::BAD_GATEWAY,
                ErrorPageTemplate {
                    message: "Failed to load shows from the catalog service. Please try again later."
                        .to_string(),
                },
            )
                .into_response()
        }
    }
}

async fn browser(state: &AppState) -> Response {
    match state.catalog.shows().await {
        Ok(shows) => ShowsBrowserTemplate {
            cards: cards_for(&shows, &ListFilter::All),
            total: shows.len(),
            options: show_options(&shows),
            query: String::new(),
            reset_select: false,
        }
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load shows");
            Html("<div class='telly-error'>Failed to load shows</div>").into_response()
        }
    }
}

async fn content(state: &AppState, filter: ListFilter) -> Response {
    match state.catalog.shows().await {
        Ok(shows) => ShowsContentTemplate {
            cards: cards_for(&shows, &filter),
            total: shows.len(),
            options: show_options(&shows),
            reset_select: true,
        }
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load shows");
            Html("<div class='telly-error'>Failed to load shows</div>").into_response()
        }
    }
}

/// Ask htmx to push the level URL into browser history.
fn with_push_url(mut response: Response, level: BrowseLevel) -> Response {
    if let Ok(value) = HeaderValue::from_str(&level.path()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("hx-push-url"), value);
    }
    response
}

fn cards_for(shows: &[Show], filter: &ListFilter) -> Vec<ShowCard> {
    filter
        .apply(shows, |s| s.id.to_string())
        .into_iter()
        .map(show_card)
        .collect()
}

pub fn show_card(show: &Show) -> ShowCard {
    ShowCard {
        title: show.name.clone(),
        image: show
            .image
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        summary: summary_snippet(show.summary.as_deref()),
        meta: show_meta(show),
        url: show.url.clone(),
    }
}

fn show_meta(show: &Show) -> String {
    let mut parts = Vec::new();
    if !show.genres.is_empty() {
        parts.push(show.genres_line());
    }
    parts.push(show.status.to_string());
    if let Some(rating) = show.rating {
        parts.push(format!("{:.1}", rating));
    }
    if let Some(runtime) = show.runtime {
        parts.push(format!("{} min", runtime));
    }
    parts.join(" | ")
}

fn show_options(shows: &[Show]) -> Vec<SelectOption> {
    shows
        .iter()
        .map(|s| SelectOption {
            value: s.id.to_string(),
            label: s.name.clone(),
        })
        .collect()
}
