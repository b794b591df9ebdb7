//! Text filtering over catalog items.
//!
//! Pure substring containment, case-insensitive, preserving input order.
//! No tokenization and no ranking.

use crate::models::{Episode, Show};

/// Items that can be matched against a search term.
pub trait Searchable {
    /// True when `needle` (already lower-cased) occurs in any of the
    /// item's searchable fields.
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for Show {
    /// Shows match on name, genres, or summary text.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.genres_line().to_lowercase().contains(needle)
            || summary_matches(self.summary.as_deref(), needle)
    }
}

impl Searchable for Episode {
    /// Episodes match on name, their "SxxExx" code, or summary text.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.code().to_lowercase().contains(needle)
            || summary_matches(self.summary.as_deref(), needle)
    }
}

// Missing summaries simply don't match. Markup is stripped so searches
// work on visible text rather than tag names.
fn summary_matches(summary: Option<&str>, needle: &str) -> bool {
    summary.is_some_and(|s| nanohtml2text::html2text(s).to_lowercase().contains(needle))
}

/// Filter `items` down to those matching `term`.
///
/// Returns a subsequence of `items` in their original order. A blank
/// term matches everything.
pub fn filter<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShowStatus;

    fn show(id: i64, name: &str, genres: &[&str], summary: Option<&str>) -> Show {
        Show {
            id,
            name: name.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            status: ShowStatus::Running,
            rating: None,
            runtime: None,
            summary: summary.map(|s| s.to_string()),
            image: None,
            url: format!("https://example.com/shows/{}", id),
        }
    }

    fn episode(season: u32, number: u32, name: &str, summary: Option<&str>) -> Episode {
        Episode {
            season,
            number,
            name: name.to_string(),
            summary: summary.map(|s| s.to_string()),
            image: None,
            url: "https://example.com".to_string(),
        }
    }

    fn sample_shows() -> Vec<Show> {
        vec![
            show(1, "Northern Lights", &["Drama"], Some("<p>A slow-burn mystery.</p>")),
            show(2, "Precinct 44", &["Comedy", "Crime"], Some("<p>Detectives, badly.</p>")),
            show(3, "Void Runner", &["Drama", "Science-Fiction"], None),
        ]
    }

    #[test]
    fn test_empty_term_is_identity() {
        let shows = sample_shows();
        let result = filter(&shows, "");
        assert_eq!(result.len(), shows.len());
        for (kept, original) in result.iter().zip(shows.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_whitespace_term_is_identity() {
        let shows = sample_shows();
        assert_eq!(filter(&shows, "   ").len(), 3);
    }

    #[test]
    fn test_preserves_original_order() {
        let shows = sample_shows();
        let result = filter(&shows, "drama");
        let ids: Vec<i64> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_case_insensitive() {
        let shows = sample_shows();
        assert_eq!(filter(&shows, "NORTHERN").len(), 1);
        assert_eq!(filter(&shows, "northern").len(), 1);
    }

    #[test]
    fn test_matches_genres() {
        let shows = sample_shows();
        let result = filter(&shows, "comedy");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_matches_summary_text_not_markup() {
        let shows = sample_shows();
        assert_eq!(filter(&shows, "mystery").len(), 1);
        // Tag names are not searchable text
        assert_eq!(filter(&shows, "<p>").len(), 0);
    }

    #[test]
    fn test_missing_summary_does_not_match() {
        let shows = sample_shows();
        assert_eq!(filter(&shows, "slow-burn").len(), 1);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let shows = sample_shows();
        assert!(filter(&shows, "zzzzz").is_empty());
    }

    #[test]
    fn test_episode_matches_code() {
        let episodes = vec![
            episode(1, 1, "Pilot", None),
            episode(2, 7, "The Long Night", None),
        ];
        let result = filter(&episodes, "s02e07");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "The Long Night");
    }

    #[test]
    fn test_episode_matches_name_and_summary() {
        let episodes = vec![
            episode(1, 1, "Pilot", Some("<p>Where it all begins.</p>")),
            episode(1, 2, "Fallout", None),
        ];
        assert_eq!(filter(&episodes, "fallout").len(), 1);
        assert_eq!(filter(&episodes, "begins").len(), 1);
    }
}
