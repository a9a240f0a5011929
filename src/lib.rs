//! # prizeline - Terminal Timeline Explorer for Prize Records
//!
//! Loads a dataset of prize records once, then lets the user narrow it by category and a
//! free-text query while a distribution table and a year timeline follow every change.
//!
//! ## Features
//!
//! - **Bundled or on-disk data**: the dataset ships in the binary; a JSON file, optionally
//!   gzip-compressed, can replace it
//! - **Literal search**: case-insensitive substring matching on names and motivations using
//!   ripgrep core libraries, with the same matcher driving highlighting
//! - **Category distribution**: counts and percentages over the filtered records
//! - **Terminal UI**: category chips, distribution bars, a year-grouped timeline and a
//!   detail card
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`dataset`] - Record model, sources and the one-time loader
//! - [`search`] - Record filter and text match highlighter
//! - [`stats`] - Category aggregation
//! - [`timeline`] - Year axis model
//! - [`session`] - Session state and derived views
//! - [`input`] and [`render`] - Terminal input and drawing
//! - [`app`] - Application core and component coordination

// Core modules
pub mod config;
pub mod dataset;
pub mod error;

// Pure transforms over the dataset
pub mod search;
pub mod session;
pub mod stats;
pub mod timeline;

// Subsystems
pub mod input;
pub mod render;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{PrizelineError, Result};

// Public API surface for external usage
pub use app::Application;
pub use config::ViewerConfig;
pub use dataset::{Category, Dataset, DatasetSource, Recipient, Record};
pub use search::{filter, highlight, Segment};
pub use session::{DerivedView, SessionState};
pub use stats::{aggregate, CategoryShare, DatasetSummary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
