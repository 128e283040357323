//! Fixed-range, fixed-bin frequency histograms.
//!
//! [`Histogram1D`] follows the TH1 convention: fills inside
//! `[lower, upper)` increment exactly one bin, fills below `lower` go to the
//! underflow counter and fills at or above `upper` go to the overflow
//! counter. Every non-NaN fill counts as an entry.
//!
//! ```rust
//! use mc_core::histogram::{BinLocation, Histogram1D};
//!
//! let mut hist = Histogram1D::new("h", "example", 10, 0.0, 1.0).unwrap();
//! assert_eq!(hist.fill(0.25), BinLocation::Bin(2));
//! assert_eq!(hist.fill(1.0), BinLocation::Overflow);
//! assert_eq!(hist.entries(), 2);
//! assert_eq!(hist.integral(), 1);
//! ```

mod error;
mod hist1d;

pub use error::HistogramError;
pub use hist1d::{BinLocation, Histogram1D, HistogramStats};
