//! Histogram plotting.
//!
//! Renders a [`Histogram1D`](crate::histogram::Histogram1D) as an SVG bar
//! chart with its title as caption and its axis titles as axis labels. The
//! renderer is a read-only consumer of a histogram file.

mod error;
mod svg;

pub use error::PlotError;
pub use svg::{
    axis_titles, plot_from_file, render_histogram_svg, PlotOptions, DEFAULT_PLOT_FILE_NAME,
};
