//! Shared helpers for building card views.

/// Longest summary shown on a card before the read-more fold.
pub const SUMMARY_LIMIT: usize = 150;

/// Image used when the upstream record ships none.
pub const PLACEHOLDER_IMAGE: &str = "/static/img/placeholder.svg";

/// Card text for records without a summary.
pub const NO_SUMMARY: &str = "No summary available.";

/// A card summary split for display. `text` always fits on the card;
/// when `truncated` is set, `rest` holds the remainder shown behind
/// the read-more control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub text: String,
    pub rest: String,
    pub truncated: bool,
}

/// Strip markup from an upstream summary.
pub fn plain_text(html: &str) -> String {
    nanohtml2text::html2text(html).trim().to_string()
}

/// Build the display summary for a card. Markup is stripped first;
/// text longer than [`SUMMARY_LIMIT`] characters is split at that
/// boundary.
pub fn summary_snippet(summary: Option<&str>) -> Snippet {
    let text = summary.map(plain_text).unwrap_or_default();
    if text.is_empty() {
        return Snippet {
            text: NO_SUMMARY.to_string(),
            rest: String::new(),
            truncated: false,
        };
    }
    match text.char_indices().nth(SUMMARY_LIMIT) {
        Some((cut, _)) => {
            let rest = text[cut..].to_string();
            let mut lead = text;
            lead.truncate(cut);
            Snippet {
                text: lead,
                rest,
                truncated: true,
            }
        }
        None => Snippet {
            text,
            rest: String::new(),
            truncated: false,
        },
    }
}
