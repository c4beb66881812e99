//! Feed item domain entity
//!
//! One news entry as read from the spreadsheet. Items carry no identity
//! beyond their row; every load replaces the previous set wholesale.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A normalized news entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Identifier from the sheet, empty when the sheet has none
    pub id: String,
    /// Free-form date text, never parsed
    pub date: String,
    pub title: String,
    pub summary: String,
    /// Full text; falls back to the summary when the sheet has none
    pub body: String,
    /// External link, empty when absent
    pub link: String,
}

impl FeedItem {
    /// The id used in detail links: the sheet id, or a slug of the title.
    pub fn effective_id(&self) -> String {
        if self.id.is_empty() {
            slugify(&self.title)
        } else {
            self.id.clone()
        }
    }

    /// Text shown on a summary card
    pub fn teaser(&self) -> &str {
        if self.summary.is_empty() {
            &self.body
        } else {
            &self.summary
        }
    }

    /// Text shown on the detail view
    pub fn full_text(&self) -> &str {
        if self.body.is_empty() {
            &self.summary
        } else {
            &self.body
        }
    }
}

fn non_slug_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"))
}

/// Lowercase, collapse every run of non `[a-z0-9]` characters into `-`,
/// and strip dashes from both ends.
///
/// Non-ASCII letters are not transliterated: `"Nyhet på gång"` becomes
/// `"nyhet-p-g-ng"`.
pub fn slugify(value: &str) -> String {
    let lower = value.to_lowercase();
    let dashed = non_slug_chars().replace_all(&lower, "-");
    dashed.trim_matches('-').to_string()
}
