//! Live filtering of the admin user table.
//!
//! The table is re-filtered from scratch on every keystroke. Rows keep
//! their rendered order; nothing is ever re-sorted.

use serde::{Deserialize, Serialize};

/// Read-only projection of a rendered user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableRow<Id> {
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl<Id> SearchableRow<Id> {
    pub fn new(id: Id, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// `needle` must already be normalized.
    fn matches(&self, needle: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .map(|value| value.to_lowercase().contains(needle))
                .unwrap_or(false)
        };
        contains(&self.name) || contains(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<Id> {
    pub visible_ids: Vec<Id>,
    pub visible_count: usize,
    pub total_count: usize,
}

impl<Id> SearchResult<Id> {
    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn filter_rows<Id: Clone>(rows: &[SearchableRow<Id>], query: &str) -> SearchResult<Id> {
    let needle = normalize_query(query);

    let visible_ids: Vec<Id> = rows
        .iter()
        .filter(|row| needle.is_empty() || row.matches(&needle))
        .map(|row| row.id.clone())
        .collect();

    log::debug!(
        "search for {:?}: {}/{} rows visible",
        needle,
        visible_ids.len(),
        rows.len()
    );

    SearchResult {
        visible_count: visible_ids.len(),
        total_count: rows.len(),
        visible_ids,
    }
}

/// How the search input should be styled for the current result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTone {
    Neutral,
    Found,
    Empty,
}

/// User-facing summary of a search, derived from a [`SearchResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFeedback {
    pub query: String,
    pub tone: SearchTone,
    pub visible_count: usize,
    pub total_count: usize,
    pub show_no_results: bool,
}

impl SearchFeedback {
    pub fn from_result<Id>(result: &SearchResult<Id>, query: &str) -> Self {
        let query = normalize_query(query);
        let tone = if query.is_empty() {
            SearchTone::Neutral
        } else if result.is_empty() {
            SearchTone::Empty
        } else {
            SearchTone::Found
        };

        Self {
            show_no_results: result.is_empty() && result.total_count > 0 && !query.is_empty(),
            visible_count: result.visible_count,
            total_count: result.total_count,
            tone,
            query,
        }
    }

    pub fn status_text(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        Some(match self.visible_count {
            0 => "No users found".to_string(),
            1 => "1 user found".to_string(),
            n => format!("{n} users found"),
        })
    }

    pub fn no_results_text(&self) -> String {
        if self.query.is_empty() {
            "No users found".to_string()
        } else {
            format!("No users found for \"{}\"", self.query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<SearchableRow<u32>> {
        vec![
            SearchableRow::new(1, "Alice", "a@x.com"),
            SearchableRow::new(2, "Bob", "b@x.com"),
        ]
    }

    #[test]
    fn empty_table_yields_empty_result() {
        let rows: Vec<SearchableRow<u32>> = Vec::new();
        let result = filter_rows(&rows, "anything");
        assert!(result.visible_ids.is_empty());
        assert_eq!(result.visible_count, 0);
        assert_eq!(result.total_count, 0);
    }

    #[test]
    fn blank_query_shows_everything_in_order() {
        let result = filter_rows(&people(), "   ");
        assert_eq!(result.visible_ids, vec![1, 2]);
        assert_eq!(result.visible_count, 2);
        assert_eq!(result.total_count, 2);
    }

    #[test]
    fn query_is_case_insensitive() {
        let result = filter_rows(&people(), "ALICE");
        assert_eq!(result.visible_ids, vec![1]);
        assert_eq!(result.total_count, 2);
    }

    #[test]
    fn email_is_searched_too() {
        let result = filter_rows(&people(), " B@X ");
        assert_eq!(result.visible_ids, vec![2]);
    }

    #[test]
    fn shared_substring_keeps_input_order() {
        let rows = vec![
            SearchableRow::new("z", "Zed", "zed@corp.io"),
            SearchableRow::new("a", "Amy", "amy@corp.io"),
        ];
        let result = filter_rows(&rows, "corp");
        assert_eq!(result.visible_ids, vec!["z", "a"]);
    }

    #[test]
    fn missing_fields_match_as_empty() {
        let rows = vec![
            SearchableRow {
                id: 1,
                name: None,
                email: Some("carol@x.com".into()),
            },
            SearchableRow {
                id: 2,
                name: None,
                email: None,
            },
        ];
        assert_eq!(filter_rows(&rows, "carol").visible_ids, vec![1]);
        assert_eq!(filter_rows(&rows, "").visible_ids, vec![1, 2]);
    }

    #[test]
    fn repeated_calls_agree() {
        let rows = people();
        assert_eq!(filter_rows(&rows, "o"), filter_rows(&rows, "o"));
    }

    #[test]
    fn feedback_for_blank_query_is_neutral() {
        let result = filter_rows(&people(), "");
        let feedback = SearchFeedback::from_result(&result, "");
        assert_eq!(feedback.tone, SearchTone::Neutral);
        assert!(!feedback.show_no_results);
        assert_eq!(feedback.status_text(), None);
    }

    #[test]
    fn feedback_counts_matches() {
        let result = filter_rows(&people(), "x.com");
        let feedback = SearchFeedback::from_result(&result, "x.com");
        assert_eq!(feedback.tone, SearchTone::Found);
        assert_eq!(feedback.status_text().as_deref(), Some("2 users found"));

        let result = filter_rows(&people(), "bob");
        let feedback = SearchFeedback::from_result(&result, "bob");
        assert_eq!(feedback.status_text().as_deref(), Some("1 user found"));
    }

    #[test]
    fn feedback_flags_no_results() {
        let result = filter_rows(&people(), " Zelda ");
        let feedback = SearchFeedback::from_result(&result, " Zelda ");
        assert_eq!(feedback.tone, SearchTone::Empty);
        assert!(feedback.show_no_results);
        assert_eq!(feedback.status_text().as_deref(), Some("No users found"));
        assert_eq!(feedback.no_results_text(), "No users found for \"zelda\"");
    }

    #[test]
    fn empty_table_never_shows_no_results_row() {
        let rows: Vec<SearchableRow<u32>> = Vec::new();
        let result = filter_rows(&rows, "q");
        let feedback = SearchFeedback::from_result(&result, "q");
        assert_eq!(feedback.tone, SearchTone::Empty);
        assert!(!feedback.show_no_results);
    }
}
