//! Renderer seam between the event loop and the terminal.
//!
//! The loop hands every renderer the same `ViewState` after each load result and each
//! action. [`FrameSnapshot`] condenses that state into the handful of facts a frame shows,
//! so tests can assert on what the user would have seen without a terminal.

use crate::error::Result;
use crate::render::ui::state::ViewState;
use crate::timeline::summary_line;

/// Draws the timeline screen and owns the terminal lifecycle.
pub trait UIRenderer {
    /// Draw one frame from `view_state`. Called after every event the loop handles.
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Take over the terminal before the first frame.
    fn initialize(&mut self) -> Result<()>;

    /// Hand the terminal back. Safe to call when `initialize` never ran.
    fn cleanup(&mut self) -> Result<()>;

    /// Columns and rows available for the first frame
    fn get_terminal_size(&self) -> Result<(u16, u16)>;
}

/// What one rendered frame showed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub loading: bool,
    /// Number of records in the timeline list
    pub shown: usize,
    /// Tooltip for the selected record
    pub selected: Option<String>,
    /// Period of the record in the detail overlay
    pub overlay: Option<String>,
    pub status: String,
}

impl FrameSnapshot {
    pub fn capture(view_state: &ViewState) -> Self {
        Self {
            loading: view_state.load_status.is_pending(),
            shown: view_state.derived.len(),
            selected: view_state.selected_record().map(summary_line),
            overlay: view_state
                .overlay_record()
                .map(|record| record.period.clone()),
            status: view_state.format_status_line(),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::session::SessionState;
    use std::sync::{Arc, Mutex};

    /// Renderer that keeps a snapshot of every frame.
    ///
    /// The frame log is shared, so a test can keep a handle after boxing the renderer
    /// into an `Application`.
    pub struct MockUIRenderer {
        frames: Arc<Mutex<Vec<FrameSnapshot>>>,
        terminal_size: (u16, u16),
        pub is_initialized: bool,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        pub fn new() -> Self {
            Self::with_size(80, 24)
        }

        pub fn with_size(width: u16, height: u16) -> Self {
            Self {
                frames: Arc::new(Mutex::new(Vec::new())),
                terminal_size: (width, height),
                is_initialized: false,
            }
        }

        /// Shared handle to the frame log.
        pub fn frames(&self) -> Arc<Mutex<Vec<FrameSnapshot>>> {
            Arc::clone(&self.frames)
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(&mut self, view_state: &ViewState) -> Result<()> {
            if let Ok(mut frames) = self.frames.lock() {
                frames.push(FrameSnapshot::capture(view_state));
            }
            Ok(())
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    fn einstein() -> Arc<Dataset> {
        Arc::new(
            Dataset::from_json_slice(
                br#"{"prizes": [
                    {"year": "1921", "category": "physics", "laureates": [
                        {"id": "26", "firstname": "Albert", "surname": "Einstein", "share": "1"}]}
                ]}"#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_snapshot_while_loading() {
        let view_state = ViewState::new(SessionState::default(), 80, 24);
        let frame = FrameSnapshot::capture(&view_state);

        assert!(frame.loading);
        assert_eq!(frame.shown, 0);
        assert_eq!(frame.selected, None);
        assert_eq!(frame.status, "Loading prize data...");
    }

    #[test]
    fn test_snapshot_with_overlay() {
        let mut view_state = ViewState::new(SessionState::default(), 80, 24);
        view_state.set_dataset(einstein());
        view_state.session.overlay_open = true;
        let frame = FrameSnapshot::capture(&view_state);

        assert!(!frame.loading);
        assert_eq!(frame.shown, 1);
        assert_eq!(
            frame.selected.as_deref(),
            Some("1921 Physics: Albert Einstein")
        );
        assert_eq!(frame.overlay.as_deref(), Some("1921"));
    }

    #[test]
    fn test_mock_records_frames_and_lifecycle() {
        let mut renderer = MockUIRenderer::with_size(120, 30);
        let frames = renderer.frames();
        assert_eq!(renderer.get_terminal_size().unwrap(), (120, 30));

        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        let mut view_state = ViewState::new(SessionState::default(), 120, 30);
        renderer.render(&view_state).unwrap();
        view_state.set_dataset(einstein());
        renderer.render(&view_state).unwrap();

        let shown: Vec<usize> = frames.lock().unwrap().iter().map(|f| f.shown).collect();
        assert_eq!(shown, vec![0, 1]);

        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }
}
