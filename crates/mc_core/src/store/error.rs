//! Error types for the histogram container.

use std::path::PathBuf;

use thiserror::Error;

use crate::histogram::HistogramError;

/// Errors raised while writing or reading a histogram file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be created, written or read.
    #[error("IO error on {path}: {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The container could not be encoded or decoded.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// The file is not a histogram container this version understands.
    #[error("Unsupported container format '{format}' version {version}")]
    UnsupportedFormat {
        /// Format tag found in the file.
        format: String,
        /// Version found in the file.
        version: u32,
    },

    /// The requested histogram is not in the file.
    #[error("Histogram '{0}' not found in file")]
    MissingHistogram(String),

    /// A stored histogram is internally inconsistent.
    #[error("Corrupt histogram: {0}")]
    Histogram(#[from] HistogramError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
