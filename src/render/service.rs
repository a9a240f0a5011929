//! Render coordination helpers.
//!
//! Provides the state machine that mediates between input actions, the dataset load and view
//! updates. Every action that touches the session re-derives the view before returning, so
//! the renderer never sees a stale filter result.

use crate::input::{InputAction, ScrollDirection};
use crate::render::protocol::LoadResponse;
use crate::render::ui::ViewState;

/// Tracks render-related state that must persist across input actions.
#[derive(Debug, Default)]
pub struct RenderLoopState {
    /// Query in effect when the search prompt opened; restored on cancel.
    search_backup: Option<String>,
}

impl RenderLoopState {
    pub fn new() -> Self {
        Self { search_backup: None }
    }

    pub fn is_searching(&self) -> bool {
        self.search_backup.is_some()
    }

    /// Apply one input action. Returns `false` when the viewer should exit.
    pub fn process_action(&mut self, action: InputAction, view_state: &mut ViewState) -> bool {
        let len = view_state.derived.len();
        match action {
            InputAction::Quit => return false,
            InputAction::MoveSelection { direction, steps } => {
                let delta = match direction {
                    ScrollDirection::Up => -(steps as isize),
                    ScrollDirection::Down => steps as isize,
                };
                view_state.session.move_selection(delta, len);
            }
            InputAction::PageUp => {
                let page = view_state.lines_per_page() as isize;
                view_state.session.move_selection(-page, len);
            }
            InputAction::PageDown => {
                let page = view_state.lines_per_page() as isize;
                view_state.session.move_selection(page, len);
            }
            InputAction::SelectFirst => {
                view_state.session.selected = if len > 0 { Some(0) } else { None };
            }
            InputAction::SelectLast => {
                view_state.session.selected = len.checked_sub(1);
            }
            InputAction::OpenDetail => {
                if view_state.selected_record().is_some() {
                    view_state.session.overlay_open = true;
                } else {
                    view_state
                        .status_line
                        .set_message("Nothing selected".to_string());
                }
            }
            InputAction::CloseDetail => {
                view_state.session.overlay_open = false;
                view_state.status_line.clear_message();
            }
            InputAction::ToggleCategory(category) => {
                let shown = view_state.session.toggle_category(category);
                view_state.refresh();
                let verb = if shown { "shown" } else { "hidden" };
                view_state
                    .status_line
                    .set_message(format!("{} {}", category.label(), verb));
            }
            InputAction::SelectAllCategories => {
                view_state.session.select_all_categories();
                view_state.refresh();
                view_state
                    .status_line
                    .set_message("All categories shown".to_string());
            }
            InputAction::ClearCategories => {
                view_state.session.clear_categories();
                view_state.refresh();
                view_state
                    .status_line
                    .set_message("All categories hidden".to_string());
            }
            InputAction::StartSearch => {
                self.search_backup = Some(view_state.session.query.clone());
                view_state.status_line.set_search_prompt();
            }
            InputAction::UpdateQuery(buffer) => {
                view_state.session.set_query(buffer.clone());
                view_state.status_line.update_search_prompt(buffer);
                view_state.refresh();
            }
            InputAction::CommitSearch => {
                self.search_backup = None;
                view_state.status_line.clear_search_prompt();
                let query = view_state.session.query.trim();
                if query.is_empty() {
                    view_state.status_line.clear_message();
                } else {
                    let message = format!("{} matches for \"{}\"", view_state.derived.len(), query);
                    view_state.status_line.set_message(message);
                }
            }
            InputAction::CancelSearch => {
                if let Some(previous) = self.search_backup.take() {
                    view_state.session.set_query(previous);
                }
                view_state.status_line.clear_search_prompt();
                view_state.refresh();
            }
            InputAction::ClearSearch => {
                view_state.session.set_query(String::new());
                view_state.refresh();
                view_state
                    .status_line
                    .set_message("Search cleared".to_string());
            }
            InputAction::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
            }
            InputAction::NoAction | InputAction::InvalidInput => {}
        }
        true
    }

    /// Install the result of the dataset load.
    pub fn handle_load(&mut self, response: LoadResponse, view_state: &mut ViewState) {
        match response {
            LoadResponse::Loaded { source, dataset } => {
                log::info!("{} records ready from {}", dataset.len(), source);
                view_state.set_dataset(dataset);
            }
            LoadResponse::Failed { source, error } => {
                log::warn!("dataset load from {} failed: {}", source, error);
                view_state.set_load_failed(format!("Could not load {}: {}", source, error));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Category, Dataset};
    use crate::error::PrizelineError;
    use crate::session::{LoadStatus, SessionState};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn loaded_state() -> (RenderLoopState, ViewState) {
        let dataset = Dataset::from_json_slice(
            br#"{"prizes": [
                {"year": "1921", "category": "physics", "laureates": [
                    {"id": "26", "firstname": "Albert", "surname": "Einstein",
                     "motivation": "for his services to Theoretical Physics", "share": "1"}]},
                {"year": "1911", "category": "chemistry", "laureates": [
                    {"id": "6", "firstname": "Marie", "surname": "Curie",
                     "motivation": "for the discovery of radium and polonium", "share": "1"}]},
                {"year": "1905", "category": "peace", "laureates": [
                    {"id": "468", "firstname": "Bertha", "surname": "von Suttner",
                     "motivation": "", "share": "1"}]}
            ]}"#,
        )
        .unwrap();
        let mut loop_state = RenderLoopState::new();
        let mut view_state = ViewState::new(SessionState::default(), 80, 24);
        loop_state.handle_load(
            LoadResponse::Loaded {
                source: "test".to_string(),
                dataset: Arc::new(dataset),
            },
            &mut view_state,
        );
        (loop_state, view_state)
    }

    fn type_query(loop_state: &mut RenderLoopState, view_state: &mut ViewState, text: &str) {
        loop_state.process_action(InputAction::StartSearch, view_state);
        let mut buffer = String::new();
        for ch in text.chars() {
            buffer.push(ch);
            loop_state.process_action(InputAction::UpdateQuery(buffer.clone()), view_state);
        }
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut loop_state, mut view_state) = loaded_state();
        assert!(loop_state.process_action(InputAction::NoAction, &mut view_state));
        assert!(!loop_state.process_action(InputAction::Quit, &mut view_state));
    }

    #[test]
    fn selection_moves_within_bounds() {
        let (mut loop_state, mut view_state) = loaded_state();
        assert_eq!(view_state.session.selected, Some(0));

        loop_state.process_action(InputAction::SelectLast, &mut view_state);
        assert_eq!(view_state.session.selected, Some(2));
        loop_state.process_action(
            InputAction::MoveSelection {
                direction: ScrollDirection::Down,
                steps: 3,
            },
            &mut view_state,
        );
        assert_eq!(view_state.session.selected, Some(2));
        loop_state.process_action(InputAction::PageUp, &mut view_state);
        assert_eq!(view_state.session.selected, Some(0));
    }

    #[test]
    fn toggling_categories_rederives() {
        let (mut loop_state, mut view_state) = loaded_state();
        loop_state.process_action(InputAction::ToggleCategory(Category::Physics), &mut view_state);

        assert_eq!(view_state.derived.len(), 2);
        assert_eq!(view_state.derived.count_for(Category::Physics), 0);
        assert_eq!(
            view_state.status_line.message.as_deref(),
            Some("Physics hidden")
        );

        loop_state.process_action(InputAction::ClearCategories, &mut view_state);
        assert!(view_state.derived.is_empty());
        assert_eq!(view_state.session.selected, None);

        loop_state.process_action(InputAction::SelectAllCategories, &mut view_state);
        assert_eq!(view_state.derived.len(), 3);
    }

    #[test]
    fn live_search_then_commit() {
        let (mut loop_state, mut view_state) = loaded_state();
        type_query(&mut loop_state, &mut view_state, "curie");
        assert!(loop_state.is_searching());
        assert_eq!(view_state.derived.len(), 1);
        assert_eq!(view_state.format_status_line(), "/curie");

        loop_state.process_action(InputAction::CommitSearch, &mut view_state);
        assert!(!loop_state.is_searching());
        assert_eq!(view_state.session.query, "curie");
        assert_eq!(
            view_state.status_line.message.as_deref(),
            Some("1 matches for \"curie\"")
        );
    }

    #[test]
    fn cancel_restores_previous_query() {
        let (mut loop_state, mut view_state) = loaded_state();
        type_query(&mut loop_state, &mut view_state, "radium");
        loop_state.process_action(InputAction::CommitSearch, &mut view_state);

        type_query(&mut loop_state, &mut view_state, "zzz");
        assert!(view_state.derived.is_empty());
        loop_state.process_action(InputAction::CancelSearch, &mut view_state);

        assert_eq!(view_state.session.query, "radium");
        assert_eq!(view_state.derived.len(), 1);
        assert!(view_state.status_line.search_prompt.is_none());

        loop_state.process_action(InputAction::ClearSearch, &mut view_state);
        assert_eq!(view_state.derived.len(), 3);
    }

    #[test]
    fn detail_overlay_requires_selection() {
        let (mut loop_state, mut view_state) = loaded_state();
        loop_state.process_action(InputAction::OpenDetail, &mut view_state);
        assert!(view_state.overlay_record().is_some());
        loop_state.process_action(InputAction::CloseDetail, &mut view_state);
        assert!(view_state.overlay_record().is_none());

        loop_state.process_action(InputAction::ClearCategories, &mut view_state);
        loop_state.process_action(InputAction::OpenDetail, &mut view_state);
        assert!(!view_state.session.overlay_open);
        assert_eq!(
            view_state.status_line.message.as_deref(),
            Some("Nothing selected")
        );
    }

    #[test]
    fn failed_load_continues_with_empty_dataset() {
        let mut loop_state = RenderLoopState::new();
        let mut view_state = ViewState::new(SessionState::default(), 80, 24);
        loop_state.handle_load(
            LoadResponse::Failed {
                source: "/missing.json".to_string(),
                error: PrizelineError::DatasetNotFound {
                    path: PathBuf::from("/missing.json"),
                },
            },
            &mut view_state,
        );

        assert!(matches!(view_state.load_status, LoadStatus::Failed(_)));
        assert!(view_state.derived.is_empty());
        assert_eq!(
            view_state.status_line.message.as_deref(),
            Some("Could not load /missing.json: Dataset not found: /missing.json")
        );
        assert!(loop_state.process_action(InputAction::SelectLast, &mut view_state));
        assert_eq!(view_state.session.selected, None);
    }
}
