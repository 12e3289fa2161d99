//! CSV populator for synthetic accident datasets.

use crate::error::CsvPopulatorError;
use accident_core::{AccidentRecord, RegionProfile};
use accident_csv::record_to_csv_fields;
use accident_generator::AccidentGenerator;
use csv::Writer;
use rand::rngs::StdRng;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Rows between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 50_000;

/// Rows generated when no count is given.
pub const DEFAULT_ROW_COUNT: u64 = 1_000_000;

pub const DEFAULT_OUTPUT_FILE: &str = "india_traffic_accidents.csv";

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes. Zero when writing to a caller-supplied sink.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// CSV populator that writes generated accident records.
pub struct CsvPopulator<R = StdRng> {
    generator: AccidentGenerator<R>,
    include_header: bool,
    progress_interval: u64,
}

impl CsvPopulator<StdRng> {
    /// Create a populator whose generator is seeded from the operating system.
    pub fn new(profile: &RegionProfile) -> Result<Self, CsvPopulatorError> {
        Ok(Self::from_generator(AccidentGenerator::from_entropy(profile)?))
    }
}

impl<R: Rng> CsvPopulator<R> {
    /// Create a populator with an explicit random source.
    pub fn with_rng(profile: &RegionProfile, rng: R) -> Result<Self, CsvPopulatorError> {
        Ok(Self::from_generator(AccidentGenerator::new(profile, rng)?))
    }

    fn from_generator(generator: AccidentGenerator<R>) -> Self {
        Self {
            generator,
            include_header: true,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Set how many rows pass between progress log lines (0 disables them).
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Id the next written record will carry.
    pub fn next_id(&self) -> u64 {
        self.generator.next_id()
    }

    /// Generate a CSV file with the specified number of records.
    ///
    /// The file is created, or truncated if it exists.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Generating CSV file '{}' with {} rows",
            output_path.display(),
            count
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        let mut metrics = self.write_rows(&mut writer, count)?;

        // Flush and get file size
        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write the specified number of records to an arbitrary sink.
    pub fn populate_writer<W: Write>(
        &mut self,
        sink: W,
        count: u64,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let mut writer = Writer::from_writer(sink);

        let mut metrics = self.write_rows(&mut writer, count)?;
        writer.flush()?;

        metrics.total_duration = start_time.elapsed();
        Ok(metrics)
    }

    fn write_rows<W: Write>(
        &mut self,
        writer: &mut Writer<W>,
        count: u64,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let mut metrics = PopulateMetrics::default();

        // Write header if requested
        if self.include_header {
            let write_start = Instant::now();
            writer.write_record(AccidentRecord::COLUMNS)?;
            metrics.write_duration += write_start.elapsed();
        }

        for _ in 0..count {
            let gen_start = Instant::now();
            let record = self.generator.next_record();
            metrics.generation_duration += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(record_to_csv_fields(&record))?;
            metrics.write_duration += write_start.elapsed();

            metrics.rows_written += 1;

            if self.progress_interval > 0 && metrics.rows_written % self.progress_interval == 0 {
                info!("  {} rows written...", metrics.rows_written);
            }
        }

        Ok(metrics)
    }
}
