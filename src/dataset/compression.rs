//! Transparent gzip support for dataset files.
//!
//! Compression is detected from magic bytes first and the file extension second, the same
//! order the viewer has always used for its inputs.

use crate::error::{PrizelineError, Result};
use async_compression::tokio::bufread::GzipDecoder;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Encodings a dataset file may be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// Plain JSON
    None,
    /// Gzip-compressed JSON (.gz files)
    Gzip,
}

impl CompressionType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
        }
    }

    pub fn is_compressed(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Detect compression from the file's first bytes, then from its extension.
pub async fn detect_compression(path: &Path) -> Result<CompressionType> {
    let mut file = File::open(path)
        .await
        .map_err(|e| PrizelineError::file_error(format!("Cannot open {}", path.display()), e))?;
    let mut magic = [0u8; 2];
    let read = read_prefix(&mut file, &mut magic)
        .await
        .map_err(|e| PrizelineError::file_error(format!("Cannot read {}", path.display()), e))?;

    if read == magic.len() && magic == GZIP_MAGIC {
        return Ok(CompressionType::Gzip);
    }

    Ok(detect_by_extension(path).unwrap_or(CompressionType::None))
}

/// Fill `buf` from the start of `reader`, stopping early only at end of file.
async fn read_prefix<R>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn detect_by_extension(path: &Path) -> Option<CompressionType> {
    let ext = path.extension()?.to_str()?;
    match ext.to_ascii_lowercase().as_str() {
        "gz" | "gzip" => Some(CompressionType::Gzip),
        _ => None,
    }
}

/// Read the whole file, decompressing it when needed.
pub async fn read_all(path: &Path, compression: CompressionType) -> Result<Vec<u8>> {
    let file = File::open(path)
        .await
        .map_err(|e| PrizelineError::file_error(format!("Cannot open {}", path.display()), e))?;
    let mut bytes = Vec::new();

    match compression {
        CompressionType::None => {
            let mut reader = BufReader::new(file);
            reader
                .read_to_end(&mut bytes)
                .await
                .map_err(|e| PrizelineError::file_error("Failed to read dataset", e))?;
        }
        CompressionType::Gzip => {
            let mut decoder = GzipDecoder::new(BufReader::new(file));
            decoder.read_to_end(&mut bytes).await.map_err(|e| {
                PrizelineError::compression(format!(
                    "Failed to decompress {}: {}",
                    path.display(),
                    e
                ))
            })?;
        }
    }

    Ok(bytes)
}
