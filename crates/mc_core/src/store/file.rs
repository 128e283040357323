//! JSON histogram container.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::error::StoreError;
use crate::histogram::Histogram1D;
use crate::sampling::{HistogramId, SampleHistograms};

/// Format tag written at the top of every container.
pub const FORMAT_NAME: &str = "simplemc-histograms";

/// Current container version.
pub const FORMAT_VERSION: u32 = 1;

/// Default output file of a generation run.
pub const DEFAULT_FILE_NAME: &str = "simpleMC.json";

#[derive(Serialize)]
struct ContainerOut<'a> {
    format: &'a str,
    version: u32,
    histograms: Vec<&'a Histogram1D>,
}

#[derive(Deserialize)]
struct ContainerIn {
    format: String,
    version: u32,
    histograms: Vec<Histogram1D>,
}

/// One line of a container listing.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramEntry {
    /// Stored name.
    pub name: String,
    /// Title.
    pub title: String,
    /// Bin count.
    pub bins: usize,
    /// Lower edge.
    pub lower: f64,
    /// Upper edge.
    pub upper: f64,
    /// Total entries including under/overflow.
    pub entries: u64,
}

impl fmt::Display for HistogramEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:<28} {:>4} bins [{}, {})  {} entries",
            self.name, self.title, self.bins, self.lower, self.upper, self.entries
        )
    }
}

/// A histogram file opened for reading.
#[derive(Clone, Debug)]
pub struct HistogramFile {
    path: PathBuf,
    histograms: Vec<Histogram1D>,
}

impl HistogramFile {
    /// Writes both generated histograms to `path`, creating or replacing it.
    ///
    /// The container is written to a temporary file in the same directory
    /// and renamed over `path` once complete, so a failed write leaves any
    /// previous file untouched.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] if the file cannot be created, flushed or moved into
    /// place; [`StoreError::Serialisation`] if encoding fails.
    pub fn create(path: impl AsRef<Path>, hists: &SampleHistograms) -> Result<(), StoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening histogram file for writing");

        let container = ContainerOut {
            format: FORMAT_NAME,
            version: FORMAT_VERSION,
            histograms: hists.iter().map(|(_, h)| h).collect(),
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;

        let mut writer = BufWriter::new(tmp);
        serde_json::to_writer_pretty(&mut writer, &container)?;
        writer.flush().map_err(|e| StoreError::io(path, e))?;
        let tmp = writer
            .into_inner()
            .map_err(|e| StoreError::io(path, e.into_error()))?;
        tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;

        info!(
            path = %path.display(),
            histograms = container.histograms.len(),
            "Histograms written"
        );
        Ok(())
    }

    /// Opens and validates a histogram file.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Io`] if the file cannot be read
    /// - [`StoreError::Serialisation`] if it is not valid JSON of the expected shape
    /// - [`StoreError::UnsupportedFormat`] on a foreign format tag or version
    /// - [`StoreError::Histogram`] if a stored histogram is inconsistent
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
        let container: ContainerIn = serde_json::from_reader(BufReader::new(file))?;

        if container.format != FORMAT_NAME || container.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedFormat {
                format: container.format,
                version: container.version,
            });
        }
        for hist in &container.histograms {
            hist.validate()?;
        }

        debug!(
            path = %path.display(),
            histograms = container.histograms.len(),
            "Histogram file opened"
        );

        Ok(Self {
            path: path.to_path_buf(),
            histograms: container.histograms,
        })
    }

    /// Path the file was opened from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrows the histogram stored under `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::MissingHistogram`] if the file does not contain it.
    pub fn get(&self, id: HistogramId) -> Result<&Histogram1D, StoreError> {
        self.histograms
            .iter()
            .find(|h| h.name() == id.name())
            .ok_or_else(|| StoreError::MissingHistogram(id.name().to_string()))
    }

    /// Takes ownership of the histogram stored under `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::MissingHistogram`] if the file does not contain it.
    pub fn into_histogram(self, id: HistogramId) -> Result<Histogram1D, StoreError> {
        self.histograms
            .into_iter()
            .find(|h| h.name() == id.name())
            .ok_or_else(|| StoreError::MissingHistogram(id.name().to_string()))
    }

    /// Lists every stored histogram in file order.
    pub fn list(&self) -> Vec<HistogramEntry> {
        self.histograms
            .iter()
            .map(|h| HistogramEntry {
                name: h.name().to_string(),
                title: h.title().to_string(),
                bins: h.bins(),
                lower: h.lower(),
                upper: h.upper(),
                entries: h.entries(),
            })
            .collect()
    }
}
