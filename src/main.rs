//! Command-line interface for accident-synth
//!
//! # Usage Examples
//!
//! ```bash
//! # One million rows with the built-in India profile
//! accident-synth generate
//!
//! # A small file for a demo, with a custom region
//! accident-synth generate \
//!   --output demo.csv \
//!   --row-count 1000 \
//!   --profile my_region.yaml
//!
//! # Dump the built-in profile as a starting point for editing
//! accident-synth profile > my_region.yaml
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use accident_populate_csv::CsvGenerateArgs;
use accident_synth::{render_profile, run_generate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "accident-synth")]
#[command(about = "A tool for generating synthetic traffic-accident datasets")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic accident dataset as CSV
    Generate {
        #[command(flatten)]
        args: CsvGenerateArgs,
    },

    /// Print the effective region profile as YAML
    Profile {
        /// Region profile YAML file to validate and print (default: built-in profile)
        #[arg(long, short = 'p', value_name = "PATH")]
        profile: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            run_generate(&args)?;
        }
        Commands::Profile { profile } => {
            print!("{}", render_profile(profile.as_deref())?);
        }
    }

    Ok(())
}
