//! File-backed container for the generated histograms.
//!
//! The container is a single JSON document holding both histograms under
//! their stored names. It is written once (atomically replacing any previous file)
//! and read back by the plotting and listing consumers.
//!
//! ```rust
//! use mc_core::sampling::{generate, GeneratorConfig, HistogramId};
//! use mc_core::store::HistogramFile;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("simpleMC.json");
//!
//! let hists = generate(GeneratorConfig::builder().num_values(100).build().unwrap()).unwrap();
//! HistogramFile::create(&path, &hists).unwrap();
//!
//! let file = HistogramFile::open(&path).unwrap();
//! assert_eq!(file.get(HistogramId::Exponential).unwrap(), &hists.exponential);
//! ```

mod error;
mod file;

pub use error::StoreError;
pub use file::{HistogramEntry, HistogramFile, DEFAULT_FILE_NAME, FORMAT_NAME, FORMAT_VERSION};
