//! Core types for the synthetic traffic-accident generator.
//!
//! This crate provides the foundational types shared by the generator,
//! the CSV conversions and the populator:
//!
//! - [`types`] - the categorical fields of a record (`Weather`, `Severity`, ...)
//! - [`AccidentRecord`] - one generated row
//! - [`RegionProfile`] - the region being simulated, loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! accident-core (this crate)
//!    │
//!    ├─── accident-generator     (samplers, per-row pipeline)
//!    ├─── accident-csv           (record <-> CSV fields)
//!    └─── accident-populate-csv  (writes the dataset)
//! ```

pub mod profile;
pub mod record;
pub mod types;

// Re-exports for convenience
pub use profile::{
    Bounds, CauseWeights, CityAnchor, LaneWeights, ProfileError, RegionProfile, RoadWeights,
    SamplingWeights, SeverityWeights, TrafficWeights, WeatherWeights,
};
pub use record::AccidentRecord;
pub use types::{
    AccidentCause, LaneUtilization, ParseLabelError, RoadCondition, Season, Severity,
    TrafficDensity, Weather,
};
