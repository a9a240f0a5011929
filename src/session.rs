//! Per-session user state and the views derived from it.
//!
//! [`SessionState`] is plain data owned by the event loop. Every mutation is followed by
//! [`SessionState::derive`], which recomputes the filtered records and the distribution
//! table from scratch; nothing derived is ever written back into the dataset.

use crate::dataset::{Category, Dataset, Record};
use crate::search::filter_indices;
use crate::stats::{aggregate, CategoryShare};
use std::collections::BTreeSet;

/// Lifecycle of the single dataset load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// Load failed; the session continues with an empty dataset.
    Failed(String),
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// User-controlled filter and selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub selected_categories: BTreeSet<Category>,
    pub query: String,
    /// Row in the year-grouped timeline list of derived records.
    pub selected: Option<usize>,
    pub overlay_open: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::with_categories(Category::ALL)
    }
}

impl SessionState {
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            selected_categories: categories.into_iter().collect(),
            query: String::new(),
            selected: None,
            overlay_open: false,
        }
    }

    /// Flip one category; returns whether it is now selected.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        if self.selected_categories.remove(&category) {
            false
        } else {
            self.selected_categories.insert(category);
            true
        }
    }

    pub fn select_all_categories(&mut self) {
        self.selected_categories = Category::ALL.into_iter().collect();
    }

    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected_categories.contains(&category)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Recompute the derived view for `dataset`.
    pub fn derive(&self, dataset: &Dataset) -> DerivedView {
        let indices = filter_indices(dataset, &self.selected_categories, &self.query);
        let distribution = aggregate(indices.iter().filter_map(|&index| dataset.get(index)));
        DerivedView {
            indices,
            distribution,
        }
    }

    /// Keep the selection inside `0..len`, closing the overlay when nothing is left.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), len) => Some(index.min(len - 1)),
        };
        if self.selected.is_none() {
            self.overlay_open = false;
        }
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        let current = self.selected.unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, len as isize - 1);
        self.selected = Some(target as usize);
    }
}

/// Filtered records and their category distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// Positions of passing records in the dataset, in dataset order.
    pub indices: Vec<usize>,
    pub distribution: Vec<CategoryShare>,
}

impl Default for DerivedView {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            distribution: aggregate(std::iter::empty::<&Record>()),
        }
    }
}

impl DerivedView {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Passing records, resolved against the dataset they were derived from.
    pub fn records<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Record> + 'a {
        self.indices.iter().filter_map(move |&index| dataset.get(index))
    }

    /// The `position`-th passing record.
    pub fn record<'a>(&self, dataset: &'a Dataset, position: usize) -> Option<&'a Record> {
        self.indices
            .get(position)
            .and_then(|&index| dataset.get(index))
    }

    pub fn count_for(&self, category: Category) -> usize {
        self.distribution
            .get(category.index())
            .map(|share| share.count)
            .unwrap_or(0)
    }
}
