//! Dataset resolution.
//!
//! A [`DatasetSource`] resolves the dataset document into memory exactly once per session.
//! There is no retry: the caller decides how to degrade when loading fails.

use crate::dataset::compression::{detect_compression, read_all};
use crate::dataset::model::{Category, Dataset};
use crate::dataset::validation::validate_dataset_path;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/prize.json");

/// Where the session's dataset comes from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Resolve and decode the full dataset.
    async fn load(&self) -> Result<Dataset>;

    /// Short description for logs and the status line.
    fn describe(&self) -> String;
}

/// The dataset shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

#[async_trait]
impl DatasetSource for BundledSource {
    async fn load(&self) -> Result<Dataset> {
        Dataset::from_json_slice(BUNDLED_DATASET.as_bytes())
    }

    fn describe(&self) -> String {
        "bundled dataset".to_string()
    }
}

/// A dataset document on disk, optionally gzip-compressed.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn load(&self) -> Result<Dataset> {
        validate_dataset_path(&self.path)?;
        let compression = detect_compression(&self.path).await?;
        let bytes = read_all(&self.path, compression).await?;
        log::debug!(
            "read {} bytes from {} (compression: {})",
            bytes.len(),
            self.path.display(),
            compression.name()
        );
        Dataset::from_json_slice(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick the source for an optional dataset path.
pub fn source_for(path: Option<&Path>) -> Box<dyn DatasetSource> {
    match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BundledSource),
    }
}

/// Load the dataset from `source`, logging what was resolved.
pub async fn load(source: &dyn DatasetSource) -> Result<Dataset> {
    let description = source.describe();
    log::debug!("loading dataset from {description}");

    match source.load().await {
        Ok(dataset) => {
            let unknown = dataset
                .iter()
                .filter(|record| record.known_category().is_none())
                .count();
            if unknown > 0 {
                log::debug!(
                    "{unknown} record(s) carry a category outside {:?} and will not be counted",
                    Category::ALL
                );
            }
            log::info!("loaded {} records from {description}", dataset.len());
            Ok(dataset)
        }
        Err(err) => {
            log::warn!("failed to load dataset from {description}: {err}");
            Err(err)
        }
    }
}
