//! Command handlers.

use accident_core::RegionProfile;
use accident_populate_csv::{CsvGenerateArgs, CsvPopulator, PopulateMetrics};
use anyhow::Context;
use std::path::Path;

/// Run the generate command: write `row_count` records to the output file.
pub fn run_generate(args: &CsvGenerateArgs) -> anyhow::Result<PopulateMetrics> {
    let profile = args
        .load_profile()
        .with_context(|| format!("Failed to load profile from {:?}", args.profile))?;

    tracing::info!(
        "Generating {} rows across {} city anchors ({} + {} days)",
        args.row_count,
        profile.cities.len(),
        profile.start_date,
        profile.window_days
    );

    let mut populator = CsvPopulator::new(&profile)
        .context("Failed to build accident generator")?
        .with_header(!args.no_header)
        .with_progress_interval(args.progress_interval);

    let metrics = populator
        .populate(&args.output, args.row_count)
        .with_context(|| format!("Failed to write dataset to {:?}", args.output))?;

    tracing::info!(
        "Done! File: {} ({} rows, {} bytes, generation {:?}, write {:?})",
        args.output.display(),
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.generation_duration,
        metrics.write_duration
    );

    Ok(metrics)
}

/// Render the effective profile (the given file, or the built-in default) as YAML.
pub fn render_profile(path: Option<&Path>) -> anyhow::Result<String> {
    let profile = match path {
        Some(path) => RegionProfile::from_file(path)
            .with_context(|| format!("Failed to load profile from {path:?}"))?,
        None => RegionProfile::default(),
    };
    profile.to_yaml().context("Failed to render profile")
}
