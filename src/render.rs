//! Rendering subsystem.
//!
//! The coordinator in [`service`] applies input actions and the load result to a
//! [`ui::ViewState`]; [`ui`] draws that state.

pub mod protocol;
pub mod service;
pub mod ui;

pub use protocol::LoadResponse;
pub use service::RenderLoopState;
