//! Domain models for the TV catalog.

use std::fmt;

/// Airing status of a show as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowStatus {
    Running,
    Ended,
    ToBeDetermined,
    InDevelopment,
}

impl ShowStatus {
    /// Parse the status string used by the catalog service.
    /// Unknown values fold to `ToBeDetermined`.
    pub fn parse(value: &str) -> Self {
        match value {
            "Running" => ShowStatus::Running,
            "Ended" => ShowStatus::Ended,
            "In Development" => ShowStatus::InDevelopment,
            _ => ShowStatus::ToBeDetermined,
        }
    }
}

impl fmt::Display for ShowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowStatus::Running => write!(f, "Running"),
            ShowStatus::Ended => write!(f, "Ended"),
            ShowStatus::ToBeDetermined => write!(f, "To Be Determined"),
            ShowStatus::InDevelopment => write!(f, "In Development"),
        }
    }
}

/// A series-level catalog record. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub status: ShowStatus,
    /// Average rating, when the catalog has one
    pub rating: Option<f64>,
    /// Typical episode length in minutes
    pub runtime: Option<u32>,
    /// Marked-up description; stripped to plain text before display
    pub summary: Option<String>,
    pub image: Option<String>,
    /// Canonical page on the catalog site
    pub url: String,
}

impl Show {
    /// Genres joined for display and search, preserving catalog order.
    pub fn genres_line(&self) -> String {
        self.genres.join(", ")
    }
}

/// A single installment of a show, keyed by (season, number) within it.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub season: u32,
    pub number: u32,
    pub name: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub url: String,
}

impl Episode {
    /// Zero-padded "SxxExx" display code, e.g. "S02E07".
    /// Seasons or numbers of 100+ widen past two digits.
    pub fn code(&self) -> String {
        format!("S{:02}E{:02}", self.season, self.number)
    }
}
