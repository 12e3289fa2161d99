//! Region profile: where, when and how records are generated.
//!
//! A profile fixes the bounding box, the city anchors used for urban
//! placement, the time window and every conditional weight table. The
//! built-in default describes India; a YAML file can override any part.
//!
//! ```yaml
//! bounds:
//!   min_lat: 8.0
//!   max_lat: 37.0
//!   min_lon: 68.0
//!   max_lon: 97.0
//! cities:
//!   - { name: Mumbai, lat: 19.076, lon: 72.8777 }
//! start_date: 2020-01-01
//! window_days: 1461
//! urban_probability: 0.7
//! jitter_degrees: 0.5
//! weights:
//!   weather:
//!     monsoon: [5, 10, 50, 30, 3, 2]
//!     summer: [40, 30, 10, 2, 5, 13]
//!     winter: [30, 40, 15, 2, 10, 3]
//! ```
//!
//! Omitted sections fall back to the defaults. Within a weight table every
//! conditioning key must be present, and each vector must have exactly one
//! weight per outcome, in the declaration order of the outcome enum.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for profile operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Error reading profile file
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing or emitting YAML
    #[error("Failed to process YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Profile parsed but describes an impossible region
    #[error("Invalid profile: {0}")]
    Invalid(String),
}

/// Largest absolute latitude, in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest absolute longitude, in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Geographic bounding box, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Whether the point lies inside the box (edges included).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    pub fn clamp_lat(&self, lat: f64) -> f64 {
        lat.clamp(self.min_lat, self.max_lat)
    }

    pub fn clamp_lon(&self, lon: f64) -> f64 {
        lon.clamp(self.min_lon, self.max_lon)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_lat: 8.0,
            max_lat: 37.0,
            min_lon: 68.0,
            max_lon: 97.0,
        }
    }
}

/// Reference point approximating a city centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityAnchor {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl CityAnchor {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}

fn default_cities() -> Vec<CityAnchor> {
    vec![
        CityAnchor::new("Mumbai", 19.0760, 72.8777),
        CityAnchor::new("Delhi", 28.6139, 77.2090),
        CityAnchor::new("Bengaluru", 12.9716, 77.5946),
        CityAnchor::new("Kolkata", 22.5726, 88.3639),
        CityAnchor::new("Hyderabad", 17.3850, 78.4867),
        CityAnchor::new("Chennai", 13.0827, 80.2707),
        CityAnchor::new("Ahmedabad", 23.0225, 72.5714),
        CityAnchor::new("Pune", 18.5204, 73.8567),
        CityAnchor::new("Jaipur", 26.9124, 75.7873),
        CityAnchor::new("Patna", 25.5941, 85.1376),
    ]
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

fn default_window_days() -> u64 {
    4 * 365 + 1
}

fn default_urban_probability() -> f64 {
    0.7
}

fn default_jitter_degrees() -> f64 {
    0.5
}

// ============================================================================
// Weight tables
// ============================================================================

/// Weather weights per season, over `Weather::ALL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherWeights {
    pub monsoon: [u32; 6],
    pub summer: [u32; 6],
    pub winter: [u32; 6],
}

impl Default for WeatherWeights {
    fn default() -> Self {
        Self {
            monsoon: [5, 10, 50, 30, 3, 2],
            summer: [40, 30, 10, 2, 5, 13],
            winter: [30, 40, 15, 2, 10, 3],
        }
    }
}

/// Road condition weights.
///
/// `wet` is over `[Wet, Flooding, Muddy]`, `dry` over `[Dry, Potholed, Construction]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadWeights {
    pub wet: [u32; 3],
    pub dry: [u32; 3],
}

impl Default for RoadWeights {
    fn default() -> Self {
        Self {
            wet: [70, 20, 10],
            dry: [60, 30, 10],
        }
    }
}

/// Severity weights per hazard tier, over `Severity::ALL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeverityWeights {
    pub hazardous: [u32; 4],
    pub wet: [u32; 4],
    pub baseline: [u32; 4],
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            hazardous: [5, 15, 40, 40],
            wet: [10, 30, 40, 20],
            baseline: [50, 30, 15, 5],
        }
    }
}

/// Accident cause weights.
///
/// `serious` is over `[HumanError, SignalViolation, MechanicalFailure]`,
/// `general` over `AccidentCause::ALL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CauseWeights {
    pub serious: [u32; 3],
    pub general: [u32; 6],
}

impl Default for CauseWeights {
    fn default() -> Self {
        Self {
            serious: [60, 25, 15],
            general: [50, 10, 10, 20, 5, 5],
        }
    }
}

/// Traffic density weights per (rush hour, near city) combination, over
/// `TrafficDensity::ALL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrafficWeights {
    pub rush_hour_urban: [u32; 3],
    pub urban: [u32; 3],
    pub rush_hour_rural: [u32; 3],
    pub rural: [u32; 3],
}

impl Default for TrafficWeights {
    fn default() -> Self {
        Self {
            rush_hour_urban: [5, 20, 75],
            urban: [20, 50, 30],
            rush_hour_rural: [30, 50, 20],
            rural: [70, 25, 5],
        }
    }
}

/// Lane utilisation weights.
///
/// `serious` is over `[LaneChange, Overtaking]`, `minor` over `[SingleLane, LaneChange]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaneWeights {
    pub serious: [u32; 2],
    pub minor: [u32; 2],
}

impl Default for LaneWeights {
    fn default() -> Self {
        Self {
            serious: [60, 40],
            minor: [70, 30],
        }
    }
}

/// Every conditional weight table used by the samplers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingWeights {
    #[serde(default)]
    pub weather: WeatherWeights,
    #[serde(default)]
    pub road: RoadWeights,
    #[serde(default)]
    pub severity: SeverityWeights,
    #[serde(default)]
    pub cause: CauseWeights,
    #[serde(default)]
    pub traffic: TrafficWeights,
    #[serde(default)]
    pub lane: LaneWeights,
}

// ============================================================================
// Profile
// ============================================================================

/// Full description of the simulated region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Every coordinate is clamped into this box
    #[serde(default)]
    pub bounds: Bounds,

    /// Anchors for urban placement
    #[serde(default = "default_cities")]
    pub cities: Vec<CityAnchor>,

    /// First day of the time window
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Day offsets are drawn from `0..=window_days`
    #[serde(default = "default_window_days")]
    pub window_days: u64,

    /// Probability that an accident is placed near a city
    #[serde(default = "default_urban_probability")]
    pub urban_probability: f64,

    /// Maximum offset from a city anchor on each axis, in degrees
    #[serde(default = "default_jitter_degrees")]
    pub jitter_degrees: f64,

    #[serde(default)]
    pub weights: SamplingWeights,
}

impl Default for RegionProfile {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            cities: default_cities(),
            start_date: default_start_date(),
            window_days: default_window_days(),
            urban_probability: default_urban_probability(),
            jitter_degrees: default_jitter_degrees(),
            weights: SamplingWeights::default(),
        }
    }
}

impl RegionProfile {
    /// Load a profile from a YAML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a profile from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        let profile: RegionProfile = serde_yaml::from_str(yaml)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Render the profile as YAML.
    pub fn to_yaml(&self) -> Result<String, ProfileError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Last date that can be generated.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.start_date.checked_add_days(Days::new(self.window_days))
    }

    /// Check the invariants the samplers rely on.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let b = &self.bounds;
        let finite = [b.min_lat, b.max_lat, b.min_lon, b.max_lon]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ProfileError::Invalid(
                "bounds must be finite numbers".to_string(),
            ));
        }
        if b.min_lat < -MAX_LATITUDE || b.max_lat > MAX_LATITUDE {
            return Err(ProfileError::Invalid(format!(
                "latitude bounds must lie within [-{MAX_LATITUDE}, {MAX_LATITUDE}], got {}..{}",
                b.min_lat, b.max_lat
            )));
        }
        if b.min_lon < -MAX_LONGITUDE || b.max_lon > MAX_LONGITUDE {
            return Err(ProfileError::Invalid(format!(
                "longitude bounds must lie within [-{MAX_LONGITUDE}, {MAX_LONGITUDE}], got {}..{}",
                b.min_lon, b.max_lon
            )));
        }
        if b.min_lat > b.max_lat || b.min_lon > b.max_lon {
            return Err(ProfileError::Invalid(format!(
                "bounds are inverted: lat {}..{}, lon {}..{}",
                b.min_lat, b.max_lat, b.min_lon, b.max_lon
            )));
        }

        if self.cities.is_empty() {
            return Err(ProfileError::Invalid(
                "at least one city anchor is required".to_string(),
            ));
        }
        if let Some(city) = self.cities.iter().find(|c| !b.contains(c.lat, c.lon)) {
            return Err(ProfileError::Invalid(format!(
                "city '{}' ({}, {}) lies outside the bounds",
                city.name, city.lat, city.lon
            )));
        }

        if !(0.0..=1.0).contains(&self.urban_probability) {
            return Err(ProfileError::Invalid(format!(
                "urban_probability must be within [0, 1], got {}",
                self.urban_probability
            )));
        }
        if !(0.0..=MAX_LONGITUDE).contains(&self.jitter_degrees) {
            return Err(ProfileError::Invalid(format!(
                "jitter_degrees must be within [0, {MAX_LONGITUDE}], got {}",
                self.jitter_degrees
            )));
        }

        if self.end_date().is_none() {
            return Err(ProfileError::Invalid(format!(
                "window of {} days starting {} overflows the calendar",
                self.window_days, self.start_date
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = RegionProfile::default();
        profile.validate().unwrap();
        assert_eq!(profile.cities.len(), 10);
        assert_eq!(profile.window_days, 1461);
        assert_eq!(
            profile.end_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let profile = RegionProfile::from_yaml("{}").unwrap();
        assert_eq!(profile, RegionProfile::default());
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
urban_probability: 0.5
weights:
  traffic:
    rush_hour_urban: [0, 0, 1]
    urban: [1, 1, 1]
    rush_hour_rural: [1, 1, 1]
    rural: [1, 0, 0]
"#;
        let profile = RegionProfile::from_yaml(yaml).unwrap();
        assert_eq!(profile.urban_probability, 0.5);
        assert_eq!(profile.weights.traffic.rush_hour_urban, [0, 0, 1]);
        // Untouched tables keep their defaults
        assert_eq!(profile.weights.weather, WeatherWeights::default());
        assert_eq!(profile.bounds, Bounds::default());
    }

    #[test]
    fn test_missing_season_is_rejected() {
        let yaml = r#"
weights:
  weather:
    monsoon: [5, 10, 50, 30, 3, 2]
    summer: [40, 30, 10, 2, 5, 13]
"#;
        let result = RegionProfile::from_yaml(yaml);
        assert!(matches!(result, Err(ProfileError::YamlError(_))));
    }

    #[test]
    fn test_wrong_vector_length_is_rejected() {
        let yaml = r#"
weights:
  lane:
    serious: [60, 40, 1]
    minor: [70, 30]
"#;
        let result = RegionProfile::from_yaml(yaml);
        assert!(matches!(result, Err(ProfileError::YamlError(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let yaml = r#"
weights:
  weather:
    monsson: [5, 10, 50, 30, 3, 2]
    monsoon: [5, 10, 50, 30, 3, 2]
    summer: [40, 30, 10, 2, 5, 13]
    winter: [30, 40, 15, 2, 10, 3]
"#;
        assert!(RegionProfile::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_invalid_profiles() {
        let mut inverted = RegionProfile::default();
        inverted.bounds.min_lat = 40.0;
        assert!(matches!(
            inverted.validate(),
            Err(ProfileError::Invalid(_))
        ));

        let mut no_cities = RegionProfile::default();
        no_cities.cities.clear();
        assert!(no_cities.validate().is_err());

        let mut outside = RegionProfile::default();
        outside.cities.push(CityAnchor::new("London", 51.5, -0.12));
        assert!(outside.validate().is_err());

        let mut probability = RegionProfile::default();
        probability.urban_probability = 1.5;
        assert!(probability.validate().is_err());

        let mut jitter = RegionProfile::default();
        jitter.jitter_degrees = -0.1;
        assert!(jitter.validate().is_err());

        let mut huge_jitter = RegionProfile::default();
        huge_jitter.jitter_degrees = 1e308;
        assert!(huge_jitter.validate().is_err());

        let mut nan_jitter = RegionProfile::default();
        nan_jitter.jitter_degrees = f64::NAN;
        assert!(nan_jitter.validate().is_err());

        let mut window = RegionProfile::default();
        window.window_days = u64::MAX;
        assert!(window.validate().is_err());
    }

    #[test]
    fn test_bounds_off_the_globe() {
        let mut huge_lat = RegionProfile::default();
        huge_lat.bounds.min_lat = -1e308;
        huge_lat.bounds.max_lat = 1e308;
        assert!(matches!(
            huge_lat.validate(),
            Err(ProfileError::Invalid(_))
        ));

        let mut huge_lon = RegionProfile::default();
        huge_lon.bounds.max_lon = 180.5;
        assert!(huge_lon.validate().is_err());

        let mut whole_globe = RegionProfile::default();
        whole_globe.bounds = Bounds {
            min_lat: -90.0,
            max_lat: 90.0,
            min_lon: -180.0,
            max_lon: 180.0,
        };
        whole_globe.jitter_degrees = 180.0;
        whole_globe.validate().unwrap();
    }

    #[test]
    fn test_yaml_round_trip() {
        let profile = RegionProfile::default();
        let yaml = profile.to_yaml().unwrap();
        let parsed = RegionProfile::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds::default();
        assert_eq!(bounds.clamp_lat(7.5), 8.0);
        assert_eq!(bounds.clamp_lat(37.2), 37.0);
        assert_eq!(bounds.clamp_lon(80.0), 80.0);
        assert!(bounds.contains(8.0, 97.0));
        assert!(!bounds.contains(7.9999, 80.0));
    }
}
