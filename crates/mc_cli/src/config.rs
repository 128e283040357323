//! Run configuration management.
//!
//! Loads run parameters from a TOML file, applies `SIMPLEMC_*` environment
//! overrides and validates the result. Command-line flags are applied last
//! by `main`.

use mc_core::plot::DEFAULT_PLOT_FILE_NAME;
use mc_core::rng::DEFAULT_SEED;
use mc_core::sampling::{GeneratorConfig, DEFAULT_NUM_VALUES, DEFAULT_XI, MAX_NUM_VALUES};
use mc_core::store::DEFAULT_FILE_NAME;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Log levels accepted in `log_level`
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Run configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Seed of the uniform source
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of generated values
    #[serde(default = "default_num_values")]
    pub num_values: usize,

    /// Mean of the exponential distribution
    #[serde(default = "default_xi")]
    pub xi: f64,

    /// Histogram file written by `generate` and read by `plot`/`list`
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// SVG file written by `plot`
    #[serde(default = "default_plot_output")]
    pub plot_output: PathBuf,

    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_num_values() -> usize {
    DEFAULT_NUM_VALUES
}

fn default_xi() -> f64 {
    DEFAULT_XI
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

fn default_plot_output() -> PathBuf {
    PathBuf::from(DEFAULT_PLOT_FILE_NAME)
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            num_values: default_num_values(),
            xi: default_xi(),
            output: default_output(),
            plot_output: default_plot_output(),
            log_level: default_log_level(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `SIMPLEMC_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("SIMPLEMC_SEED") {
            self.seed = parse_env("SIMPLEMC_SEED", &seed)?;
        }

        if let Some(num_values) = lookup("SIMPLEMC_NUM_VALUES") {
            self.num_values = parse_env("SIMPLEMC_NUM_VALUES", &num_values)?;
        }

        if let Some(xi) = lookup("SIMPLEMC_XI") {
            self.xi = parse_env("SIMPLEMC_XI", &xi)?;
        }

        if let Some(output) = lookup("SIMPLEMC_OUTPUT") {
            self.output = PathBuf::from(output);
        }

        if let Some(log_level) = lookup("SIMPLEMC_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Apply command-line flags; `None` leaves the current value in place
    pub fn with_cli_overrides(
        mut self,
        seed: Option<u64>,
        num_values: Option<usize>,
        xi: Option<f64>,
        output: Option<PathBuf>,
    ) -> Self {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(num_values) = num_values {
            self.num_values = num_values;
        }
        if let Some(xi) = xi {
            self.xi = xi;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    /// Check `log_level` alone, before it is handed to the log filter
    pub fn validate_log_level(&self) -> Result<(), ConfigError> {
        match self.log_level_error() {
            Some(error) => Err(ConfigError::Validation(vec![error])),
            None => Ok(()),
        }
    }

    fn log_level_error(&self) -> Option<String> {
        if VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            None
        } else {
            Some(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ))
        }
    }

    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Some(error) = self.log_level_error() {
            errors.push(error);
        }

        if self.num_values == 0 {
            errors.push("num_values must be greater than 0".to_string());
        }
        if self.num_values > MAX_NUM_VALUES {
            errors.push(format!(
                "num_values {} exceeds maximum allowed ({})",
                self.num_values, MAX_NUM_VALUES
            ));
        }

        if !(self.xi.is_finite() && self.xi > 0.0) {
            errors.push(format!("xi {} must be a positive finite number", self.xi));
        }

        if self.output.as_os_str().is_empty() {
            errors.push("output cannot be empty".to_string());
        }

        if self.plot_output.as_os_str().is_empty() {
            errors.push("plot_output cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Build the library generator configuration
    pub fn generator_config(&self) -> Result<GeneratorConfig, mc_core::sampling::ConfigError> {
        GeneratorConfig::builder()
            .seed(self.seed)
            .num_values(self.num_values)
            .xi(self.xi)
            .build()
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Env(format!("{}='{}' is not a valid value", key, value)))
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unparsable environment override
    #[error("Environment variable error: {0}")]
    Env(String),

    /// Validation errors
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
