//! List command implementation
//!
//! Prints the histograms stored in a histogram file.

use std::path::Path;

use mc_core::store::{HistogramEntry, HistogramFile};

use crate::Result;

/// Run the list command
pub fn run(input: &Path) -> Result<Vec<HistogramEntry>> {
    let file = HistogramFile::open(input)?;
    let entries = file.list();

    println!("{}", file.path().display());
    for entry in &entries {
        println!("  {}", entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use mc_core::sampling::{generate, GeneratorConfig};

    #[test]
    fn test_list_stored_histograms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        let config = GeneratorConfig::builder().num_values(50).build().unwrap();
        HistogramFile::create(&path, &generate(config).unwrap()).unwrap();

        let entries = run(&path).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["h_Uni", "h_Exp"]);
    }

    #[test]
    fn test_list_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CliError::Store(_))));
    }
}
