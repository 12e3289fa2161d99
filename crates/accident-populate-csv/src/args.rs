//! CLI argument definitions for the CSV populator.

use crate::populator::{DEFAULT_OUTPUT_FILE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_ROW_COUNT};
use accident_core::{ProfileError, RegionProfile};
use clap::Args;
use std::path::PathBuf;

/// Arguments for generating a CSV dataset.
#[derive(Args, Clone, Debug)]
pub struct CsvGenerateArgs {
    /// Output CSV file (overwritten if it exists)
    #[arg(long, short = 'o', env = "ACCIDENT_SYNTH_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Number of records to generate
    #[arg(long, env = "ACCIDENT_SYNTH_ROW_COUNT", default_value_t = DEFAULT_ROW_COUNT)]
    pub row_count: u64,

    /// Region profile YAML file (built-in India profile when omitted)
    #[arg(long, short = 'p')]
    pub profile: Option<PathBuf>,

    /// Log progress every N rows (0 disables progress logging)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: u64,

    /// Do not write the header line
    #[arg(long)]
    pub no_header: bool,
}

impl CsvGenerateArgs {
    /// Load the profile named on the command line, or the built-in default.
    pub fn load_profile(&self) -> Result<RegionProfile, ProfileError> {
        match &self.profile {
            Some(path) => RegionProfile::from_file(path),
            None => Ok(RegionProfile::default()),
        }
    }
}
