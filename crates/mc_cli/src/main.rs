//! simplemc - Monte Carlo Histogram CLI
//!
//! Command-line entry point for the `mc_core` sampling library.
//!
//! # Commands
//!
//! - `simplemc generate` - Draw samples and write `h_Uni`/`h_Exp` to a histogram file
//! - `simplemc plot` - Render one stored histogram as SVG
//! - `simplemc list` - List the histograms stored in a file
//! - `simplemc check` - Validate and print the effective configuration
//!
//! # Configuration
//!
//! Parameters are resolved in order: defaults, `--config` TOML file,
//! `SIMPLEMC_*` environment variables, command-line flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mc_core::plot::PlotOptions;
use mc_core::sampling::HistogramId;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::RunConfig;

/// Monte Carlo histogram generator
#[derive(Parser)]
#[command(name = "simplemc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (adds a `debug` directive on top of `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "simplemc.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw samples and write both histograms to a file
    Generate {
        /// Seed of the uniform source
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of values to generate
        #[arg(short, long)]
        num_values: Option<usize>,

        /// Mean of the exponential distribution
        #[arg(short, long)]
        xi: Option<f64>,

        /// Output histogram file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a stored histogram as SVG
    Plot {
        /// Histogram file to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Histogram to plot (h_Exp or h_Uni)
        #[arg(short = 'H', long, default_value = "h_Exp")]
        histogram: HistogramId,

        /// Output SVG file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plot density instead of raw counts
        #[arg(long)]
        normalise: bool,
    },

    /// List the histograms stored in a file
    List {
        /// Histogram file to read
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Validate and print the effective configuration
    Check,
}

/// `RUST_LOG` wins over `log_level`; `--verbose` raises either to `debug`.
fn tracing_filter(rust_log: Option<&str>, log_level: &str, verbose: bool) -> EnvFilter {
    let filter = match rust_log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(log_level),
    };
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn init_tracing(config: &RunConfig, verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = tracing_filter(rust_log.as_deref(), &config.log_level, verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RunConfig::load_or_default(&cli.config)?.with_env_override()?;
    config.validate_log_level()?;

    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    info!("Using configuration file {}", cli.config.display());

    match cli.command {
        Commands::Generate {
            seed,
            num_values,
            xi,
            output,
        } => {
            let config = config.with_cli_overrides(seed, num_values, xi, output);
            config.validate()?;
            commands::generate::run(&config).map(|_| ())
        }
        Commands::Plot {
            input,
            histogram,
            output,
            normalise,
        } => {
            let input = input.unwrap_or(config.output);
            let output = output.unwrap_or(config.plot_output);
            let options = PlotOptions {
                normalise,
                ..PlotOptions::default()
            };
            commands::plot::run(&input, histogram, &output, &options)
        }
        Commands::List { input } => {
            let input = input.unwrap_or(config.output);
            commands::list::run(&input).map(|_| ())
        }
        Commands::Check => commands::check::run(&config),
    }
}
