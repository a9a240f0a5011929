//! Category distribution and dataset summary figures.

use crate::dataset::{Category, Dataset, Record};
use std::collections::HashSet;
use std::fmt::Write as _;

/// One row of the category distribution table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    /// `count / total * 100`; exactly 0 when the input is empty.
    pub percentage: f64,
    pub label: &'static str,
    pub color: &'static str,
}

/// Count records per category.
///
/// Always returns six entries in canonical order. Records whose category falls outside the
/// enumeration still count toward the total but toward no entry.
pub fn aggregate<'a, I>(records: I) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = [0usize; Category::ALL.len()];
    let mut total = 0usize;

    for record in records {
        total += 1;
        if let Some(category) = record.known_category() {
            counts[category.index()] += 1;
        }
    }

    Category::ALL
        .into_iter()
        .map(|category| {
            let count = counts[category.index()];
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            CategoryShare {
                category,
                count,
                percentage,
                label: category.label(),
                color: category.color(),
            }
        })
        .collect()
}

/// Headline figures for a loaded dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub records: usize,
    /// Number of distinct periods.
    pub years: usize,
}

impl DatasetSummary {
    pub fn of(dataset: &Dataset) -> Self {
        let years: HashSet<&str> = dataset.iter().map(|record| record.period.as_str()).collect();
        Self {
            records: dataset.len(),
            years: years.len(),
        }
    }

    pub fn describe(&self) -> String {
        format!("{} prizes from {} years", self.records, self.years)
    }
}

/// Plain-text rendering of a distribution, one category per line.
pub fn format_distribution(shares: &[CategoryShare]) -> String {
    let mut out = String::new();
    for share in shares {
        let _ = writeln!(
            out,
            "{:<12}{:>6}{:>8.1}%",
            share.label, share.count, share.percentage
        );
    }
    out
}
