//! UI state management structures
//!
//! `ViewState` owns everything a frame needs: the shared dataset, the session, the derived
//! view and the status line. Renderers only read it.

use crate::dataset::{Dataset, Record};
use crate::session::{DerivedView, LoadStatus, SessionState};
use crate::stats::DatasetSummary;
use crate::timeline::TimelineModel;
use std::sync::Arc;

/// Rows taken by the header, chips, distribution panel and status line.
const CHROME_HEIGHT: u16 = 12;

#[derive(Debug)]
pub struct ViewState {
    /// Shared, immutable dataset; empty until the load resolves
    pub dataset: Arc<Dataset>,

    pub load_status: LoadStatus,

    /// User-controlled filters and selection
    pub session: SessionState,

    /// Filtered records and distribution for the current session
    pub derived: DerivedView,

    /// Derived positions in timeline list order; the selection indexes into this
    pub timeline_order: Vec<usize>,

    /// Headline figures for the whole dataset
    pub summary: DatasetSummary,

    pub status_line: StatusLine,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ViewState {
    /// Create a view state that waits for the dataset to load
    pub fn new(session: SessionState, viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            dataset: Arc::new(Dataset::empty()),
            load_status: LoadStatus::Loading,
            session,
            derived: DerivedView::default(),
            timeline_order: Vec::new(),
            summary: DatasetSummary::default(),
            status_line: StatusLine::new(),
            viewport_width,
            viewport_height,
        }
    }

    /// Install the loaded dataset and derive the first view.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.summary = DatasetSummary::of(&dataset);
        self.dataset = dataset;
        self.load_status = LoadStatus::Ready;
        self.refresh();
    }

    /// Continue with an empty dataset after a failed load.
    pub fn set_load_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.dataset = Arc::new(Dataset::empty());
        self.summary = DatasetSummary::default();
        self.status_line.set_error(message.clone());
        self.load_status = LoadStatus::Failed(message);
        self.refresh();
    }

    /// Recompute the derived view after a session change.
    pub fn refresh(&mut self) {
        self.derived = self.session.derive(&self.dataset);
        self.timeline_order =
            TimelineModel::build(self.derived.records(&self.dataset)).display_order();
        self.session.clamp_selection(self.derived.len());
    }

    /// The record under the selection cursor.
    pub fn selected_record(&self) -> Option<&Record> {
        let row = self.session.selected?;
        let position = *self.timeline_order.get(row)?;
        self.derived.record(&self.dataset, position)
    }

    /// Record shown in the detail overlay, if it is open.
    pub fn overlay_record(&self) -> Option<&Record> {
        if self.session.overlay_open {
            self.selected_record()
        } else {
            None
        }
    }

    /// Rows available to the timeline list
    pub fn lines_per_page(&self) -> u16 {
        self.viewport_height.saturating_sub(CHROME_HEIGHT).max(1)
    }

    /// Update terminal dimensions. Returns true if dimensions actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;
        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
        }
        changed
    }

    /// Format the complete status line for this view state
    pub fn format_status_line(&self) -> String {
        self.status_line.format_status_line(
            &self.load_status,
            &self.summary,
            self.derived.len(),
            self.session.query.trim(),
        )
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
    pub is_error: bool,
    /// Text typed into the open search prompt
    pub search_prompt: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary message
    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
        self.is_error = false;
    }

    pub fn set_error(&mut self, message: String) {
        self.message = Some(message);
        self.is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.is_error = false;
    }

    pub fn set_search_prompt(&mut self) {
        self.search_prompt = Some(String::new());
    }

    pub fn update_search_prompt(&mut self, buffer: String) {
        self.search_prompt = Some(buffer);
    }

    pub fn clear_search_prompt(&mut self) {
        self.search_prompt = None;
    }

    /// Format the status line for display
    pub fn format_status_line(
        &self,
        load_status: &LoadStatus,
        summary: &DatasetSummary,
        shown: usize,
        query: &str,
    ) -> String {
        if let Some(buffer) = &self.search_prompt {
            return format!("/{}", buffer);
        }

        let position = match load_status {
            LoadStatus::Loading => "Loading prize data...".to_string(),
            LoadStatus::Ready | LoadStatus::Failed(_) => {
                format!("{} of {}", shown, summary.describe())
            }
        };

        let mut status = position;
        if !query.is_empty() {
            status.push_str(&format!(" | search: {}", query));
        }
        if let Some(message) = &self.message {
            status.push_str(&format!(" | {}", message));
        }
        status
    }
}
