//! Path checks run before a dataset file is opened.

use crate::error::{PrizelineError, Result};
use std::path::Path;

/// Validate that a dataset path points at a readable, non-empty regular file.
///
/// # Error Cases
/// - Path does not exist: [`PrizelineError::DatasetNotFound`]
/// - Path is a directory or other non-file: [`PrizelineError::NotAFile`]
/// - File holds zero bytes: [`PrizelineError::EmptyDataset`]
/// - Metadata cannot be read: [`PrizelineError::FileError`]
pub fn validate_dataset_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PrizelineError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| PrizelineError::file_error("Failed to read dataset metadata", e))?;

    if !metadata.is_file() {
        return Err(PrizelineError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() == 0 {
        return Err(PrizelineError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
