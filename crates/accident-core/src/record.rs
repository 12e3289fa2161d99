//! The generated row.

use crate::types::{
    AccidentCause, LaneUtilization, RoadCondition, Severity, TrafficDensity, Weather,
};
use chrono::{NaiveDate, NaiveTime};

/// One synthetic accident.
///
/// Records are produced by the generator, written out immediately and never
/// mutated. Every categorical field is derived from earlier fields, so a
/// record read back from disk is expected to satisfy the same relations.
#[derive(Debug, Clone, PartialEq)]
pub struct AccidentRecord {
    /// Sequential identifier, starting at 1
    pub id: u64,
    pub date: NaiveDate,
    /// Time of day, minute precision in the output
    pub time: NaiveTime,
    /// Latitude in degrees, rounded to 4 decimal places
    pub latitude: f64,
    /// Longitude in degrees, rounded to 4 decimal places
    pub longitude: f64,
    pub severity: Severity,
    pub road_condition: RoadCondition,
    pub weather: Weather,
    pub vehicles_involved: u8,
    pub injuries: u32,
    pub fatalities: u32,
    pub accident_cause: AccidentCause,
    pub traffic_density: TrafficDensity,
    pub lane_utilization: LaneUtilization,
    pub nearby_accidents: u32,
}

impl AccidentRecord {
    /// Column names, in output order.
    pub const COLUMNS: [&'static str; 15] = [
        "id",
        "date",
        "time",
        "latitude",
        "longitude",
        "severity",
        "road_condition",
        "weather",
        "vehicles_involved",
        "injuries",
        "fatalities",
        "accident_cause",
        "traffic_density",
        "lane_utilization",
        "nearby_accidents",
    ];
}
