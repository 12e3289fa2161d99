//! Geographic placement.

use super::ConditionalSampler;
use accident_core::{Bounds, RegionProfile};
use rand::Rng;

/// Sampled coordinates, plus whether they were placed around a city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPlacement {
    pub latitude: f64,
    pub longitude: f64,
    /// True when the urban branch was taken. Traffic and nearby-accident
    /// sampling condition on this.
    pub near_city: bool,
}

/// Round to 4 decimal places (about 11 m of latitude).
pub fn round_coordinate(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Places an accident near a random city anchor or uniformly in the region.
#[derive(Debug, Clone)]
pub struct GeoSampler {
    bounds: Bounds,
    anchors: Vec<(f64, f64)>,
    urban_probability: f64,
    jitter: f64,
}

impl GeoSampler {
    /// The profile must already be validated: at least one anchor, bounds on
    /// the globe, a probability within [0, 1] and jitter of at most 180 degrees.
    pub fn new(profile: &RegionProfile) -> Self {
        Self {
            bounds: profile.bounds,
            anchors: profile.cities.iter().map(|c| (c.lat, c.lon)).collect(),
            urban_probability: profile.urban_probability,
            jitter: profile.jitter_degrees,
        }
    }

    fn urban<R: Rng + ?Sized>(&self, rng: &mut R) -> GeoPlacement {
        let (lat, lon) = self.anchors[rng.gen_range(0..self.anchors.len())];
        let lat = round_coordinate(lat + rng.gen_range(-self.jitter..=self.jitter));
        let lon = round_coordinate(lon + rng.gen_range(-self.jitter..=self.jitter));

        GeoPlacement {
            latitude: self.bounds.clamp_lat(lat),
            longitude: self.bounds.clamp_lon(lon),
            near_city: true,
        }
    }

    fn rural<R: Rng + ?Sized>(&self, rng: &mut R) -> GeoPlacement {
        let b = &self.bounds;
        // Rounding can step past a bound that is not on the 1e-4 grid.
        let lat = round_coordinate(rng.gen_range(b.min_lat..=b.max_lat));
        let lon = round_coordinate(rng.gen_range(b.min_lon..=b.max_lon));

        GeoPlacement {
            latitude: b.clamp_lat(lat),
            longitude: b.clamp_lon(lon),
            near_city: false,
        }
    }
}

impl ConditionalSampler for GeoSampler {
    type Input = ();
    type Output = GeoPlacement;

    fn sample<R: Rng + ?Sized>(&self, _input: (), rng: &mut R) -> GeoPlacement {
        if rng.gen_bool(self.urban_probability) {
            self.urban(rng)
        } else {
            self.rural(rng)
        }
    }
}
