//! Error types for the CSV populator.

use thiserror::Error;

/// Errors that can occur while writing a dataset.
#[derive(Error, Debug)]
pub enum CsvPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generator could not be built.
    #[error("Generator error: {0}")]
    Generator(#[from] accident_generator::GeneratorError),
}
