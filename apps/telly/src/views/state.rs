//! Browse state shared by the shows and episodes levels.

use crate::filter::{self, Searchable};

/// Neutral dropdown value meaning "no selection".
pub const ALL: &str = "all";

/// Which level of the catalog the client is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseLevel {
    AllShows,
    ShowEpisodes(i64),
}

impl BrowseLevel {
    /// Canonical URL for this level, pushed into browser history when
    /// a fragment swap changes level.
    pub fn path(&self) -> String {
        match self {
            BrowseLevel::AllShows => "/shows".to_string(),
            BrowseLevel::ShowEpisodes(id) => format!("/shows/{}/episodes", id),
        }
    }
}

/// The filter in effect at one browse level.
///
/// Search and dropdown selection are mutually exclusive: activating
/// one resets the other to its neutral value, so at most one narrows
/// the list at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Search(String),
    Selected(String),
}

impl ListFilter {
    /// Derive the filter from request parameters. A present dropdown
    /// value wins over a search term; blank values are neutral.
    pub fn resolve(q: Option<&str>, selected: Option<&str>) -> Self {
        if let Some(value) = selected {
            if !value.is_empty() && value != ALL {
                return ListFilter::Selected(value.to_string());
            }
            return ListFilter::All;
        }
        match q.map(str::trim) {
            Some(term) if !term.is_empty() => ListFilter::Search(term.to_string()),
            _ => ListFilter::All,
        }
    }

    /// The term to show in the search input.
    pub fn search_term(&self) -> &str {
        match self {
            ListFilter::Search(term) => term,
            _ => "",
        }
    }

    /// The key to mark selected in the dropdown.
    pub fn selected_key(&self) -> &str {
        match self {
            ListFilter::Selected(key) => key,
            _ => ALL,
        }
    }

    /// Apply the filter to a list, preserving input order. `key`
    /// yields the dropdown identity of an item.
    pub fn apply<'a, T, K>(&self, items: &'a [T], key: K) -> Vec<&'a T>
    where
        T: Searchable,
        K: Fn(&T) -> String,
    {
        match self {
            ListFilter::All => items.iter().collect(),
            ListFilter::Search(term) => filter::filter(items, term),
            ListFilter::Selected(wanted) => items
                .iter()
                .filter(|item| &key(item) == wanted)
                .collect(),
        }
    }
}
