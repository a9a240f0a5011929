//! High-level input service.
//!
//! Polls terminal events, runs the navigation/search input state machine, and yields
//! domain-level `InputAction`s that the render coordinator consumes.

use crate::dataset::Category;
use crate::error::{PrizelineError, Result};
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use std::time::Duration;

/// Lines moved by one mouse wheel tick.
const MOUSE_SCROLL_LINES: usize = 3;

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Navigation,
    SearchInput,
}

/// Direction for selection movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// High-level input actions emitted by the state machine/service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    MoveSelection {
        direction: ScrollDirection,
        steps: usize,
    },
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,
    OpenDetail,
    CloseDetail,
    ToggleCategory(Category),
    SelectAllCategories,
    ClearCategories,
    StartSearch,
    /// Live query while the search prompt is open.
    UpdateQuery(String),
    CommitSearch,
    CancelSearch,
    ClearSearch,
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
    NoAction,
    InvalidInput,
}

/// Key handling for the timeline: navigation keys, category toggles and a search prompt.
pub struct InputStateMachine {
    state: InputState,
    search_buffer: String,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self {
            state: InputState::Navigation,
            search_buffer: String::new(),
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        match self.state {
            InputState::Navigation => self.handle_navigation_key(key_event),
            InputState::SearchInput => self.handle_search_key(key_event),
        }
    }

    fn handle_navigation_key(&mut self, key_event: KeyEvent) -> InputAction {
        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Quit
            }
            KeyCode::Char('j') | KeyCode::Down if plain => InputAction::MoveSelection {
                direction: ScrollDirection::Down,
                steps: 1,
            },
            KeyCode::Char('k') | KeyCode::Up if plain => InputAction::MoveSelection {
                direction: ScrollDirection::Up,
                steps: 1,
            },
            KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::PageDown if plain => {
                InputAction::PageDown
            }
            KeyCode::Char('b') | KeyCode::PageUp if plain => InputAction::PageUp,
            KeyCode::Char('g') | KeyCode::Home if plain => InputAction::SelectFirst,
            KeyCode::Char('G') | KeyCode::End if plain => InputAction::SelectLast,
            KeyCode::Enter => InputAction::OpenDetail,
            KeyCode::Esc => InputAction::CloseDetail,
            KeyCode::Char(digit @ '1'..='6') if plain => {
                let index = (digit as u8 - b'1') as usize;
                match Category::from_index(index) {
                    Some(category) => InputAction::ToggleCategory(category),
                    None => InputAction::InvalidInput,
                }
            }
            KeyCode::Char('a') if plain => InputAction::SelectAllCategories,
            KeyCode::Char('x') if plain => InputAction::ClearCategories,
            KeyCode::Char('/') if plain => {
                self.state = InputState::SearchInput;
                self.search_buffer.clear();
                InputAction::StartSearch
            }
            KeyCode::Char('c') if plain => InputAction::ClearSearch,
            KeyCode::Char('q') if plain => InputAction::Quit,
            _ => InputAction::InvalidInput,
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) -> InputAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.leave_search();
                InputAction::CancelSearch
            }
            KeyCode::Esc => {
                self.leave_search();
                InputAction::CancelSearch
            }
            KeyCode::Enter => {
                self.leave_search();
                InputAction::CommitSearch
            }
            KeyCode::Backspace => {
                self.search_buffer.pop();
                InputAction::UpdateQuery(self.search_buffer.clone())
            }
            KeyCode::Char(ch)
                if !ch.is_control()
                    && !key_event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.search_buffer.push(ch);
                InputAction::UpdateQuery(self.search_buffer.clone())
            }
            _ => InputAction::InvalidInput,
        }
    }

    fn leave_search(&mut self) {
        self.state = InputState::Navigation;
        self.search_buffer.clear();
    }

    pub fn get_search_buffer(&self) -> &str {
        &self.search_buffer
    }

    pub fn get_state(&self) -> InputState {
        self.state
    }
}

impl Default for InputStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    state_machine: InputStateMachine,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            state_machine: InputStateMachine::new(),
        }
    }

    /// Wait up to `timeout` for one terminal event and translate it.
    pub fn poll_action(&mut self, timeout: Duration) -> Result<Option<InputAction>> {
        let ready = event::poll(timeout)
            .map_err(|e| PrizelineError::ui(format!("poll terminal events: {e}")))?;
        if ready {
            let event =
                event::read().map_err(|e| PrizelineError::ui(format!("read terminal event: {e}")))?;
            return Ok(self.process_event(event));
        }
        Ok(None)
    }

    /// Translate one terminal event. Ignored and unbound input yields `None`.
    pub fn process_event(&mut self, event: Event) -> Option<InputAction> {
        let action = match event {
            Event::Key(key_event) => self.state_machine.handle_key_event(key_event),
            Event::Resize(width, height) => InputAction::Resize { width, height },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => InputAction::MoveSelection {
                    direction: ScrollDirection::Down,
                    steps: MOUSE_SCROLL_LINES,
                },
                MouseEventKind::ScrollUp => InputAction::MoveSelection {
                    direction: ScrollDirection::Up,
                    steps: MOUSE_SCROLL_LINES,
                },
                _ => InputAction::NoAction,
            },
            _ => InputAction::NoAction,
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}
