//! Forward conversion: AccidentRecord → CSV fields.

use accident_core::AccidentRecord;

/// Output format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Output format of the `time` column. Seconds are dropped.
pub const TIME_FORMAT: &str = "%H:%M";

/// Render a record as CSV fields, in `AccidentRecord::COLUMNS` order.
///
/// Coordinates are written with exactly 4 decimal places; categorical
/// fields use their labels.
pub fn record_to_csv_fields(record: &AccidentRecord) -> Vec<String> {
    vec![
        record.id.to_string(),
        record.date.format(DATE_FORMAT).to_string(),
        record.time.format(TIME_FORMAT).to_string(),
        format!("{:.4}", record.latitude),
        format!("{:.4}", record.longitude),
        record.severity.as_str().to_string(),
        record.road_condition.as_str().to_string(),
        record.weather.as_str().to_string(),
        record.vehicles_involved.to_string(),
        record.injuries.to_string(),
        record.fatalities.to_string(),
        record.accident_cause.as_str().to_string(),
        record.traffic_density.as_str().to_string(),
        record.lane_utilization.as_str().to_string(),
        record.nearby_accidents.to_string(),
    ]
}
