//! Prize dataset: record model and loading.
//!
//! The dataset is resolved once per session and never mutated afterwards; every view the
//! viewer shows is derived from it.

pub mod compression;
pub mod loader;
pub mod model;
pub mod validation;

pub use loader::{load, source_for, BundledSource, DatasetSource, FileSource};
pub use model::{Category, Dataset, Recipient, Record};
