//! Category and free-text filtering over a dataset.
//!
//! A record passes when its category is selected and, for a non-blank query, when the
//! trimmed query occurs (case-insensitively) in a recipient's full name, the record's
//! shared motivation, or a recipient's motivation. Output keeps dataset order.

use crate::dataset::{Category, Dataset, Record};
use crate::search::matcher::LiteralMatcher;
use std::collections::BTreeSet;

/// Predicate built once per (selection, query) pair and applied to each record.
#[derive(Debug, Clone)]
pub struct RecordFilter<'s> {
    selected: &'s BTreeSet<Category>,
    text: TextCondition,
}

#[derive(Debug, Clone)]
enum TextCondition {
    /// Blank query: every record passes.
    Any,
    Literal(LiteralMatcher),
    /// Query could not be compiled; nothing passes.
    Never,
}

impl<'s> RecordFilter<'s> {
    pub fn new(selected: &'s BTreeSet<Category>, query: &str) -> Self {
        let trimmed = query.trim();
        let text = if trimmed.is_empty() {
            TextCondition::Any
        } else {
            match LiteralMatcher::new(trimmed) {
                Ok(matcher) => TextCondition::Literal(matcher),
                Err(err) => {
                    log::warn!("search disabled for this query: {err}");
                    TextCondition::Never
                }
            }
        };

        Self { selected, text }
    }

    /// Whether `record` passes both conditions.
    pub fn matches(&self, record: &Record) -> bool {
        let Some(category) = record.known_category() else {
            return false;
        };
        if !self.selected.contains(&category) {
            return false;
        }

        match &self.text {
            TextCondition::Any => true,
            TextCondition::Never => false,
            TextCondition::Literal(matcher) => text_matches(record, matcher),
        }
    }
}

fn text_matches(record: &Record, matcher: &LiteralMatcher) -> bool {
    record
        .recipients()
        .iter()
        .any(|recipient| matcher.is_match(&recipient.full_name()))
        || record
            .shared_motivation
            .as_deref()
            .is_some_and(|motivation| matcher.is_match(motivation))
        || record
            .recipients()
            .iter()
            .any(|recipient| matcher.is_match(&recipient.motivation))
}

/// Records of `dataset` that pass the category and text conditions, in dataset order.
///
/// An empty `selected` set yields an empty result.
pub fn filter<'a>(
    dataset: &'a Dataset,
    selected: &BTreeSet<Category>,
    query: &str,
) -> Vec<&'a Record> {
    if selected.is_empty() {
        return Vec::new();
    }
    let predicate = RecordFilter::new(selected, query);
    dataset.iter().filter(|record| predicate.matches(record)).collect()
}

/// Same as [`filter`], returning positions in the dataset instead of references.
pub fn filter_indices(
    dataset: &Dataset,
    selected: &BTreeSet<Category>,
    query: &str,
) -> Vec<usize> {
    if selected.is_empty() {
        return Vec::new();
    }
    let predicate = RecordFilter::new(selected, query);
    dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| predicate.matches(record))
        .map(|(index, _)| index)
        .collect()
}
