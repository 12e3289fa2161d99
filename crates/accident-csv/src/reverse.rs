//! Reverse conversion: CSV fields → AccidentRecord.

use crate::forward::{DATE_FORMAT, TIME_FORMAT};
use accident_core::AccidentRecord;
use chrono::{NaiveDate, NaiveTime};
use std::str::FromStr;

/// Error type for CSV parsing failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CsvParseError {
    /// Wrong number of fields on the line
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// A field did not parse as its column's type
    #[error("Failed to parse '{value}' as {column}: {message}")]
    InvalidField {
        column: &'static str,
        value: String,
        message: String,
    },
}

fn parse<T>(fields: &[impl AsRef<str>], idx: usize) -> Result<T, CsvParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = fields[idx].as_ref();
    value.parse().map_err(|e: T::Err| CsvParseError::InvalidField {
        column: AccidentRecord::COLUMNS[idx],
        value: value.to_string(),
        message: e.to_string(),
    })
}

fn parse_with<T>(
    fields: &[impl AsRef<str>],
    idx: usize,
    format: &str,
    parser: fn(&str, &str) -> chrono::ParseResult<T>,
) -> Result<T, CsvParseError> {
    let value = fields[idx].as_ref();
    parser(value, format).map_err(|e| CsvParseError::InvalidField {
        column: AccidentRecord::COLUMNS[idx],
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Parse one CSV line's fields back into a record.
///
/// This is the reverse of [`record_to_csv_fields`](crate::record_to_csv_fields).
/// Times come back with zero seconds since the output keeps only minutes.
pub fn csv_fields_to_record(fields: &[impl AsRef<str>]) -> Result<AccidentRecord, CsvParseError> {
    if fields.len() != AccidentRecord::COLUMNS.len() {
        return Err(CsvParseError::FieldCount {
            expected: AccidentRecord::COLUMNS.len(),
            actual: fields.len(),
        });
    }

    Ok(AccidentRecord {
        id: parse(fields, 0)?,
        date: parse_with(fields, 1, DATE_FORMAT, NaiveDate::parse_from_str)?,
        time: parse_with(fields, 2, TIME_FORMAT, NaiveTime::parse_from_str)?,
        latitude: parse(fields, 3)?,
        longitude: parse(fields, 4)?,
        severity: parse(fields, 5)?,
        road_condition: parse(fields, 6)?,
        weather: parse(fields, 7)?,
        vehicles_involved: parse(fields, 8)?,
        injuries: parse(fields, 9)?,
        fatalities: parse(fields, 10)?,
        accident_cause: parse(fields, 11)?,
        traffic_density: parse(fields, 12)?,
        lane_utilization: parse(fields, 13)?,
        nearby_accidents: parse(fields, 14)?,
    })
}
