//! One-dimensional histogram with uniform bins.

use serde::{Deserialize, Serialize};

use super::error::HistogramError;

/// Where a filled value landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinLocation {
    /// Below the lower edge.
    Underflow,
    /// Inside the range, in the bin with this zero-based index.
    Bin(usize),
    /// At or above the upper edge.
    Overflow,
    /// NaN; not recorded anywhere.
    Invalid,
}

/// Summary statistics of the in-range fills.
///
/// Mirrors the statistics box of a TH1: the mean and standard deviation
/// are computed from the unbinned values that landed inside the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramStats {
    /// Every recorded fill, including underflow and overflow.
    pub entries: u64,
    /// Fills that landed inside `[lower, upper)`.
    pub in_range: u64,
    /// Mean of the in-range values (0 when there are none).
    pub mean: f64,
    /// Population standard deviation of the in-range values (0 when there are none).
    pub std_dev: f64,
}

/// Fixed-range histogram with `bins` equal-width bins over `[lower, upper)`.
///
/// The histogram is booked empty, filled one value at a time and then
/// handed off by value (to persistence or plotting).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Histogram1D {
    name: String,
    title: String,
    bins: usize,
    lower: f64,
    upper: f64,
    counts: Vec<u64>,
    underflow: u64,
    overflow: u64,
    entries: u64,
    sum_x: f64,
    sum_x2: f64,
    #[serde(default)]
    x_title: String,
    #[serde(default)]
    y_title: String,
}

impl Histogram1D {
    /// Books an empty histogram.
    ///
    /// # Errors
    ///
    /// - [`HistogramError::ZeroBins`] if `bins == 0`
    /// - [`HistogramError::InvalidRange`] unless both bounds are finite and `lower < upper`
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        bins: usize,
        lower: f64,
        upper: f64,
    ) -> Result<Self, HistogramError> {
        if bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(HistogramError::InvalidRange { lower, upper });
        }

        Ok(Self {
            name: name.into(),
            title: title.into(),
            bins,
            lower,
            upper,
            counts: vec![0; bins],
            underflow: 0,
            overflow: 0,
            entries: 0,
            sum_x: 0.0,
            sum_x2: 0.0,
            x_title: String::new(),
            y_title: String::new(),
        })
    }

    /// Checks the internal consistency of a histogram that was deserialised
    /// rather than booked through [`Histogram1D::new`].
    pub fn validate(&self) -> Result<(), HistogramError> {
        if self.bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        if !self.lower.is_finite() || !self.upper.is_finite() || self.lower >= self.upper {
            return Err(HistogramError::InvalidRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.counts.len() != self.bins {
            return Err(HistogramError::CountMismatch {
                name: self.name.clone(),
                expected: self.bins,
                found: self.counts.len(),
            });
        }
        Ok(())
    }

    /// Histogram name (the lookup key in a histogram file).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of in-range bins.
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Lower edge of the first bin.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper edge of the last bin (exclusive).
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Width of every bin.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.bins as f64
    }

    /// Classifies `x` without recording it.
    pub fn locate(&self, x: f64) -> BinLocation {
        if x.is_nan() {
            BinLocation::Invalid
        } else if x < self.lower {
            BinLocation::Underflow
        } else if x >= self.upper {
            BinLocation::Overflow
        } else {
            let fraction = (x - self.lower) / (self.upper - self.lower);
            // Rounding can push values just below `upper` onto `bins`.
            let index = ((fraction * self.bins as f64) as usize).min(self.bins - 1);
            BinLocation::Bin(index)
        }
    }

    /// Index of the in-range bin containing `x`, if any.
    #[inline]
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        match self.locate(x) {
            BinLocation::Bin(index) => Some(index),
            _ => None,
        }
    }

    /// Records one value and reports where it landed.
    pub fn fill(&mut self, x: f64) -> BinLocation {
        let location = self.locate(x);
        match location {
            BinLocation::Invalid => return location,
            BinLocation::Underflow => self.underflow += 1,
            BinLocation::Overflow => self.overflow += 1,
            BinLocation::Bin(index) => {
                self.counts[index] += 1;
                self.sum_x += x;
                self.sum_x2 += x * x;
            }
        }
        self.entries += 1;
        location
    }

    /// Count in bin `index`, or `None` if the index is out of range.
    #[inline]
    pub fn bin_content(&self, index: usize) -> Option<u64> {
        self.counts.get(index).copied()
    }

    /// All in-range bin counts, in ascending bin order.
    #[inline]
    pub fn bin_contents(&self) -> &[u64] {
        &self.counts
    }

    /// Lower edge of bin `index`. `bin_low_edge(bins())` is the upper edge.
    #[inline]
    pub fn bin_low_edge(&self, index: usize) -> f64 {
        self.lower + index as f64 * self.bin_width()
    }

    /// Centre of bin `index`.
    #[inline]
    pub fn bin_centre(&self, index: usize) -> f64 {
        self.lower + (index as f64 + 0.5) * self.bin_width()
    }

    /// Number of recorded fills, including underflow and overflow.
    #[inline]
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Number of fills inside `[lower, upper)`.
    #[inline]
    pub fn integral(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Fills below the lower edge.
    #[inline]
    pub fn underflow(&self) -> u64 {
        self.underflow
    }

    /// Fills at or above the upper edge.
    #[inline]
    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    /// Mean and standard deviation of the in-range fills.
    pub fn stats(&self) -> HistogramStats {
        let in_range = self.integral();
        let (mean, std_dev) = if in_range == 0 {
            (0.0, 0.0)
        } else {
            let n = in_range as f64;
            let mean = self.sum_x / n;
            let variance = (self.sum_x2 / n - mean * mean).max(0.0);
            (mean, variance.sqrt())
        };

        HistogramStats {
            entries: self.entries,
            in_range,
            mean,
            std_dev,
        }
    }

    /// Bin contents scaled to a probability density: `count / (entries * width)`.
    ///
    /// Returns all zeros for an empty histogram.
    pub fn normalised(&self) -> Vec<f64> {
        if self.entries == 0 {
            return vec![0.0; self.bins];
        }
        let scale = 1.0 / (self.entries as f64 * self.bin_width());
        self.counts.iter().map(|&c| c as f64 * scale).collect()
    }

    /// Largest in-range bin count.
    #[inline]
    pub fn maximum(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Horizontal axis title.
    #[inline]
    pub fn x_title(&self) -> &str {
        &self.x_title
    }

    /// Vertical axis title.
    #[inline]
    pub fn y_title(&self) -> &str {
        &self.y_title
    }

    /// Sets the horizontal axis title.
    pub fn set_x_title(&mut self, title: impl Into<String>) {
        self.x_title = title.into();
    }

    /// Sets the vertical axis title.
    pub fn set_y_title(&mut self, title: impl Into<String>) {
        self.y_title = title.into();
    }
}
