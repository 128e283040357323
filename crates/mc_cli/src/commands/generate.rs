//! Generate command implementation
//!
//! Runs one generation pass and writes `h_Uni` and `h_Exp` to the output file.

use tracing::info;

use mc_core::sampling::{generate, SampleHistograms};
use mc_core::store::HistogramFile;

use crate::config::RunConfig;
use crate::Result;

/// Run the generate command
pub fn run(config: &RunConfig) -> Result<SampleHistograms> {
    let generator = config.generator_config()?;

    info!("Starting generation...");
    info!("  Seed: {}", generator.seed());
    info!("  Values: {}", generator.num_values());
    info!("  xi: {}", generator.xi());
    info!("  Output: {}", config.output.display());

    let hists = generate(generator)?;
    HistogramFile::create(&config.output, &hists)?;

    print_summary(&hists);
    info!("Generation complete");
    Ok(hists)
}

fn print_summary(hists: &SampleHistograms) {
    println!();
    println!(
        "{:<8} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Name", "Entries", "In range", "Overflow", "Mean", "Std dev"
    );
    println!("{}", "-".repeat(63));
    for (_, hist) in hists.iter() {
        let stats = hist.stats();
        println!(
            "{:<8} {:>10} {:>10} {:>10} {:>10.4} {:>10.4}",
            hist.name(),
            stats.entries,
            stats.in_range,
            hist.overflow(),
            stats.mean,
            stats.std_dev
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use mc_core::sampling::HistogramId;

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            num_values: 1_000,
            output: dir.path().join("run.json"),
            ..RunConfig::default()
        };

        let hists = run(&config).unwrap();
        assert_eq!(hists.uniform.entries(), 1_000);

        let file = HistogramFile::open(&config.output).unwrap();
        assert_eq!(
            file.get(HistogramId::Exponential).unwrap(),
            &hists.exponential
        );
    }

    #[test]
    fn test_generate_rejects_invalid_xi() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            xi: 0.0,
            output: dir.path().join("run.json"),
            ..RunConfig::default()
        };

        assert!(matches!(run(&config), Err(CliError::Generator(_))));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_generate_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            num_values: 10,
            output: dir.path().join("missing/run.json"),
            ..RunConfig::default()
        };

        assert!(matches!(run(&config), Err(CliError::Store(_))));
    }
}
