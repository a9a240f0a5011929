//! Protocol definitions shared between the render coordinator and the dataset loader task.

use crate::dataset::Dataset;
use crate::error::PrizelineError;
use std::sync::Arc;

/// Outcome of the one-time dataset load, sent from the loader task to the coordinator.
#[derive(Debug)]
pub enum LoadResponse {
    Loaded {
        /// Human-readable description of where the data came from.
        source: String,
        dataset: Arc<Dataset>,
    },
    Failed {
        source: String,
        error: PrizelineError,
    },
}

impl LoadResponse {
    pub fn source(&self) -> &str {
        match self {
            Self::Loaded { source, .. } | Self::Failed { source, .. } => source,
        }
    }
}
