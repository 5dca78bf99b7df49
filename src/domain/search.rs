//! Accent-insensitive fuzzy matching for the task search box
//!
//! A query matches when it is a substring of the target, or when one word of
//! the target is within a single edit of it.
//!
//! # Examples
//!
//! ```
//! use worklane::domain::search::matches_query;
//!
//! assert!(matches_query("María Rojas", "maria"));
//! assert!(matches_query("María Rojas", "rojaz"));
//! assert!(!matches_query("María Rojas", "mariana"));
//! ```

use crate::domain::work_item::WorkItem;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase and strip diacritics ("María" → "maria")
pub fn normalize_text(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Unit-cost edit distance over chars
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0usize; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let substitution = if a_char == *b_char { 0 } else { 1 };
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}

/// Whether `target` matches the search `query`. A blank query matches everything.
pub fn matches_query(target: &str, query: &str) -> bool {
    let query = normalize_text(query.trim());
    if query.is_empty() {
        return true;
    }

    let target = normalize_text(target);
    if target.contains(&query) {
        return true;
    }

    let query_len = query.chars().count();
    target.split_whitespace().any(|token| {
        token.chars().count().abs_diff(query_len) <= 1 && levenshtein(token, &query) <= 1
    })
}

/// Department selection plus free-text search over visible tasks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// None shows every department
    pub department: Option<String>,
    pub query: String,
}

impl TaskFilter {
    pub fn new(department: Option<String>, query: impl Into<String>) -> Self {
        TaskFilter {
            department,
            query: query.into(),
        }
    }

    pub fn matches(&self, task: &WorkItem) -> bool {
        let department_ok = self
            .department
            .as_deref()
            .map_or(true, |department| task.department == department);

        department_ok
            && [
                task.employee_name.as_str(),
                task.title.as_str(),
                task.description.as_str(),
                task.project_name.as_str(),
            ]
            .iter()
            .any(|field| matches_query(field, &self.query))
    }

    /// Tasks passing the filter, in input order
    pub fn apply(&self, tasks: &[WorkItem]) -> Vec<WorkItem> {
        tasks.iter().filter(|task| self.matches(task)).cloned().collect()
    }
}
