//! Check command implementation
//!
//! Validates the effective configuration and prints it.

use tracing::info;

use crate::config::RunConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &RunConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;
    config.generator_config()?;

    println!("Configuration OK");
    println!("  seed:        {}", config.seed);
    println!("  num_values:  {}", config.num_values);
    println!("  xi:          {}", config.xi);
    println!("  output:      {}", config.output.display());
    println!("  plot_output: {}", config.plot_output.display());
    println!("  log_level:   {}", config.log_level);
    Ok(())
}
