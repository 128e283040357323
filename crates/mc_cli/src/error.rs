//! Error types for the CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or environment error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generator parameters rejected by the library
    #[error("Invalid generator parameters: {0}")]
    Generator(#[from] mc_core::sampling::ConfigError),

    /// Generation pass failed
    #[error("Sampling error: {0}")]
    Sampling(#[from] mc_core::sampling::SamplingError),

    /// Histogram file error
    #[error("Histogram file error: {0}")]
    Store(#[from] mc_core::store::StoreError),

    /// Plotting error
    #[error("Plot error: {0}")]
    Plot(#[from] mc_core::plot::PlotError),
}

/// Result alias used throughout the CLI
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::histogram::HistogramError;

    // Every variant wraps a lower-level error.
    fn has_source(error: &CliError) -> bool {
        use std::error::Error as _;
        match error {
            CliError::Config(_)
            | CliError::Generator(_)
            | CliError::Sampling(_)
            | CliError::Store(_)
            | CliError::Plot(_) => error.source().is_some(),
        }
    }

    #[test]
    fn test_conversions_keep_source() {
        let errors: Vec<CliError> = vec![
            ConfigError::Env("SIMPLEMC_SEED".to_string()).into(),
            mc_core::sampling::ConfigError::InvalidValueCount(0).into(),
            mc_core::sampling::SamplingError::OutOfDomain(0.0).into(),
            mc_core::store::StoreError::MissingHistogram("h_Exp".to_string()).into(),
            mc_core::plot::PlotError::Backend("closed".to_string()).into(),
            mc_core::sampling::SamplingError::Histogram(HistogramError::ZeroBins).into(),
        ];

        for error in &errors {
            assert!(has_source(error), "{:?}", error);
        }
        assert!(errors[0].to_string().starts_with("Configuration error"));
        assert!(errors[3].to_string().contains("h_Exp"));
    }
}
