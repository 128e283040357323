//! Plot command implementation
//!
//! Reads one histogram from a histogram file, labels its axes and renders it
//! as SVG.

use std::path::Path;

use tracing::info;

use mc_core::plot::{plot_from_file, PlotOptions};
use mc_core::sampling::HistogramId;

use crate::Result;

/// Run the plot command
pub fn run(input: &Path, id: HistogramId, output: &Path, options: &PlotOptions) -> Result<()> {
    info!("Plotting {} from {}", id, input.display());
    plot_from_file(input, id, options, output)?;
    println!("Wrote {}", output.display());
    Ok(())
}
