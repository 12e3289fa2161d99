//! CSV conversions for accident records.
//!
//! This crate provides bidirectional conversions between
//! [`AccidentRecord`](accident_core::AccidentRecord) and the string fields of
//! one CSV line.
//!
//! # Modules
//!
//! - [`forward`] - AccidentRecord → CSV fields
//! - [`reverse`] - CSV fields → AccidentRecord
//!
//! # Example
//!
//! ```ignore
//! use accident_csv::{csv_fields_to_record, record_to_csv_fields};
//!
//! let fields = record_to_csv_fields(&record);
//! let parsed = csv_fields_to_record(&fields)?;
//! ```

pub mod forward;
pub mod reverse;

pub use forward::{record_to_csv_fields, DATE_FORMAT, TIME_FORMAT};
pub use reverse::{csv_fields_to_record, CsvParseError};
