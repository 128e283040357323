//! SVG bar-chart rendering with `plotters`.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use super::error::PlotError;
use crate::histogram::Histogram1D;
use crate::sampling::HistogramId;
use crate::store::HistogramFile;

/// Default output file of the plot command.
pub const DEFAULT_PLOT_FILE_NAME: &str = "h_Exp.svg";

const MIN_DIMENSION: u32 = 100;

/// Rendering options.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Plot `count / (entries * bin_width)` instead of raw counts.
    pub normalise: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            normalise: false,
        }
    }
}

/// Axis titles applied to a histogram before it is drawn.
pub fn axis_titles(id: HistogramId) -> (&'static str, &'static str) {
    match id {
        HistogramId::Uniform => ("r", "f(r)"),
        HistogramId::Exponential => ("x", "f(x;ξ)"),
    }
}

fn backend_err(err: impl std::fmt::Display) -> PlotError {
    PlotError::Backend(err.to_string())
}

/// Draws `hist` as an SVG bar chart at `path`.
///
/// # Errors
///
/// [`PlotError::InvalidSize`] for images smaller than 100x100 pixels;
/// [`PlotError::Backend`] if the file cannot be written.
pub fn render_histogram_svg(
    hist: &Histogram1D,
    options: &PlotOptions,
    path: impl AsRef<Path>,
) -> Result<(), PlotError> {
    let path = path.as_ref();
    if options.width < MIN_DIMENSION || options.height < MIN_DIMENSION {
        return Err(PlotError::InvalidSize {
            width: options.width,
            height: options.height,
        });
    }

    let heights: Vec<f64> = if options.normalise {
        hist.normalised()
    } else {
        hist.bin_contents().iter().map(|&c| c as f64).collect()
    };
    let mut y_max = heights.iter().copied().fold(0.0_f64, f64::max);
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    let root = SVGBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(hist.title(), ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(hist.lower()..hist.upper(), 0.0..(y_max * 1.1))
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(hist.x_title())
        .y_desc(hist.y_title())
        .draw()
        .map_err(backend_err)?;

    chart
        .draw_series(heights.iter().enumerate().map(|(i, &height)| {
            Rectangle::new(
                [(hist.bin_low_edge(i), 0.0), (hist.bin_low_edge(i + 1), height)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;

    info!(
        path = %path.display(),
        histogram = hist.name(),
        entries = hist.entries(),
        "Histogram plotted"
    );
    Ok(())
}

/// Opens a histogram file, labels the histogram `id` and renders it.
///
/// # Errors
///
/// [`PlotError::Store`] if the file or histogram cannot be loaded, plus
/// everything [`render_histogram_svg`] can return.
pub fn plot_from_file(
    input: impl AsRef<Path>,
    id: HistogramId,
    options: &PlotOptions,
    output: impl AsRef<Path>,
) -> Result<(), PlotError> {
    let mut hist = HistogramFile::open(input)?.into_histogram(id)?;
    let (x_title, y_title) = axis_titles(id);
    hist.set_x_title(x_title);
    hist.set_y_title(y_title);
    render_histogram_svg(&hist, options, output)
}
