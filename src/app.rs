//! Application orchestration layer
//!
//! This module wires the dataset loader, the input thread and the renderer together. It owns
//! no view logic itself: input actions and the load result go through
//! [`RenderLoopState`], and the renderer redraws after each event.

pub mod runtime;

use crate::dataset::DatasetSource;
use crate::error::{PrizelineError, Result};
use crate::input::InputAction;
use crate::render::ui::{UIRenderer, ViewState};
use crate::render::{LoadResponse, RenderLoopState};
use crate::session::SessionState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Application orchestrator - coordinates components without duplicating their state
pub struct Application {
    source: Arc<dyn DatasetSource>,
    ui_renderer: Box<dyn UIRenderer>,
    /// Session the viewer starts in (initial categories and query)
    initial_session: SessionState,
    poll_interval: Duration,
}

impl Application {
    pub fn new(
        source: Arc<dyn DatasetSource>,
        ui_renderer: Box<dyn UIRenderer>,
        initial_session: SessionState,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            ui_renderer,
            initial_session,
            poll_interval,
        }
    }

    /// Run the interactive viewer until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_handle =
            runtime::spawn_input_thread(input_tx, Arc::clone(&shutdown), self.poll_interval);

        let result = self.run_with_input(input_rx).await;

        shutdown.store(true, Ordering::SeqCst);
        // The input thread exits within one poll interval once shutdown is set.
        let _ = tokio::task::spawn_blocking(move || input_handle.join()).await;

        self.ui_renderer.cleanup()?;
        result.map(|_| ())
    }

    /// Event loop over an arbitrary action stream. Returns the final view state.
    ///
    /// The dataset load is started here; input keeps flowing while it is pending.
    pub async fn run_with_input(
        &mut self,
        mut input_rx: UnboundedReceiver<InputAction>,
    ) -> Result<ViewState> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view_state = ViewState::new(self.initial_session.clone(), width, height);
        let mut render_state = RenderLoopState::new();

        let mut load_rx = runtime::spawn_load_task(Arc::clone(&self.source));
        let mut loading = true;

        self.ui_renderer.render(&view_state)?;

        loop {
            tokio::select! {
                response = &mut load_rx, if loading => {
                    loading = false;
                    let response = response.unwrap_or_else(|_| LoadResponse::Failed {
                        source: self.source.describe(),
                        error: PrizelineError::other("loader task ended without a result"),
                    });
                    render_state.handle_load(response, &mut view_state);
                }
                action = input_rx.recv() => {
                    match action {
                        Some(action) => {
                            if !render_state.process_action(action, &mut view_state) {
                                break;
                            }
                        }
                        // Input source closed
                        None => break,
                    }
                }
            }

            self.ui_renderer.render(&view_state)?;
        }

        Ok(view_state)
    }
}
