//! Error types for plotting.

use thiserror::Error;

use crate::store::StoreError;

/// Errors raised while rendering a histogram.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The histogram file could not be read.
    #[error("Cannot load histogram: {0}")]
    Store(#[from] StoreError),

    /// The drawing backend failed (file creation or rendering).
    #[error("Plot backend error: {0}")]
    Backend(String),

    /// Requested image dimensions are unusable.
    #[error("Invalid plot size {width}x{height}: both dimensions must be at least 100 pixels")]
    InvalidSize {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}
