//! The two histograms filled by a generation pass, and their typed ids.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::histogram::{HistogramError, Histogram1D};

/// Bin count shared by both generated histograms.
pub const SAMPLE_BINS: usize = 100;

/// Identifies one of the generated histograms.
///
/// The string names only exist in the persisted file and on the command
/// line; in code the histograms are looked up by this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HistogramId {
    /// Uniform variates `r`, booked over [0, 1).
    Uniform,
    /// Exponential variates `x`, booked over [0, 5).
    Exponential,
}

impl HistogramId {
    /// Every id, in file order.
    pub const ALL: [HistogramId; 2] = [HistogramId::Uniform, HistogramId::Exponential];

    /// Name under which the histogram is stored.
    pub fn name(self) -> &'static str {
        match self {
            HistogramId::Uniform => "h_Uni",
            HistogramId::Exponential => "h_Exp",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            HistogramId::Uniform => "uniform random numbers",
            HistogramId::Exponential => "exponential random numbers",
        }
    }

    /// Booked range `(lower, upper)`.
    pub fn range(self) -> (f64, f64) {
        match self {
            HistogramId::Uniform => (0.0, 1.0),
            HistogramId::Exponential => (0.0, 5.0),
        }
    }

    /// Looks an id up by its stored name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Books an empty histogram for this id.
    pub fn book(self) -> Result<Histogram1D, HistogramError> {
        let (lower, upper) = self.range();
        Histogram1D::new(self.name(), self.title(), SAMPLE_BINS, lower, upper)
    }
}

impl fmt::Display for HistogramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A histogram name that matches no [`HistogramId`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown histogram '{0}': expected h_Uni or h_Exp")]
pub struct UnknownHistogram(pub String);

impl FromStr for HistogramId {
    type Err = UnknownHistogram;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownHistogram(s.to_string()))
    }
}

/// Output of one generation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleHistograms {
    /// `h_Uni`: the uniform draws.
    pub uniform: Histogram1D,
    /// `h_Exp`: the transformed exponential values.
    pub exponential: Histogram1D,
}

impl SampleHistograms {
    /// Books both histograms empty.
    pub fn book() -> Result<Self, HistogramError> {
        Ok(Self {
            uniform: HistogramId::Uniform.book()?,
            exponential: HistogramId::Exponential.book()?,
        })
    }

    /// Borrows the histogram with the given id.
    pub fn get(&self, id: HistogramId) -> &Histogram1D {
        match id {
            HistogramId::Uniform => &self.uniform,
            HistogramId::Exponential => &self.exponential,
        }
    }

    /// Mutably borrows the histogram with the given id.
    pub fn get_mut(&mut self, id: HistogramId) -> &mut Histogram1D {
        match id {
            HistogramId::Uniform => &mut self.uniform,
            HistogramId::Exponential => &mut self.exponential,
        }
    }

    /// Iterates over `(id, histogram)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (HistogramId, &Histogram1D)> {
        HistogramId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}
