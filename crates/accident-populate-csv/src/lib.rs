//! CSV dataset writer for synthetic traffic accidents.
//!
//! This crate drives an [`AccidentGenerator`](accident_generator::AccidentGenerator)
//! and writes its records to a CSV file with a header line.
//!
//! # Example
//!
//! ```ignore
//! use accident_core::RegionProfile;
//! use accident_populate_csv::CsvPopulator;
//!
//! let mut populator = CsvPopulator::new(&RegionProfile::default())?;
//! let metrics = populator.populate("/path/to/accidents.csv", 1000)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::CsvGenerateArgs;
pub use error::CsvPopulatorError;
pub use populator::{
    CsvPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE, DEFAULT_OUTPUT_FILE,
    DEFAULT_PROGRESS_INTERVAL, DEFAULT_ROW_COUNT,
};
