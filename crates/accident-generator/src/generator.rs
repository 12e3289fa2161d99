//! Row pipeline producing accident records.

use crate::samplers::{
    CasualtySampler, CauseSampler, ConditionalSampler, GeoSampler, LaneSampler,
    NearbyAccidentsSampler, RoadConditionSampler, SeveritySampler, TemporalSampler,
    TrafficSampler, WeatherSampler,
};
use crate::GeneratorError;
use accident_core::{AccidentRecord, RegionProfile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::debug;

/// Vehicles involved, drawn uniformly and independently of everything else.
pub const VEHICLES_INVOLVED: RangeInclusive<u8> = 1..=4;

/// Data generator that produces accident records one at a time.
///
/// All weight tables are built once, up front; after construction every
/// call to [`next_record`](Self::next_record) succeeds. The only state that
/// carries over between rows is the random source and the id counter.
pub struct AccidentGenerator<R = StdRng> {
    temporal: TemporalSampler,
    weather: WeatherSampler,
    road: RoadConditionSampler,
    severity: SeveritySampler,
    cause: CauseSampler,
    geo: GeoSampler,
    traffic: TrafficSampler,
    lane: LaneSampler,
    nearby: NearbyAccidentsSampler,
    casualties: CasualtySampler,
    /// Injected random source
    rng: R,
    /// Id assigned to the next record
    next_id: u64,
}

impl AccidentGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    ///
    /// Two generators created this way produce unrelated data.
    pub fn from_entropy(profile: &RegionProfile) -> Result<Self, GeneratorError> {
        Self::new(profile, StdRng::from_entropy())
    }
}

impl<R: Rng> AccidentGenerator<R> {
    /// Create a generator for the given profile and random source.
    pub fn new(profile: &RegionProfile, rng: R) -> Result<Self, GeneratorError> {
        profile.validate()?;
        let weights = &profile.weights;

        let generator = Self {
            temporal: TemporalSampler::new(profile),
            weather: WeatherSampler::new(&weights.weather)?,
            road: RoadConditionSampler::new(&weights.road)?,
            severity: SeveritySampler::new(&weights.severity)?,
            cause: CauseSampler::new(&weights.cause)?,
            geo: GeoSampler::new(profile),
            traffic: TrafficSampler::new(&weights.traffic)?,
            lane: LaneSampler::new(&weights.lane)?,
            nearby: NearbyAccidentsSampler,
            casualties: CasualtySampler,
            rng,
            next_id: 1,
        };

        debug!(
            "Built sampler tables: {} city anchors, window {} + {} days",
            profile.cities.len(),
            profile.start_date,
            profile.window_days
        );

        Ok(generator)
    }

    /// Id that the next generated record will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> AccidentRecord {
        let rng = &mut self.rng;

        let moment = self.temporal.sample((), rng);
        let weather = self.weather.sample(moment.season, rng);
        let road_condition = self.road.sample(weather, rng);
        let severity = self.severity.sample((road_condition, weather), rng);

        let place = self.geo.sample((), rng);
        let vehicles_involved = rng.gen_range(VEHICLES_INVOLVED);
        let accident_cause = self.cause.sample((severity, weather, road_condition), rng);
        let traffic_density = self.traffic.sample((moment.hour, place.near_city), rng);
        let lane_utilization = self.lane.sample((traffic_density, severity), rng);
        let nearby_accidents = self.nearby.sample((place.near_city, traffic_density), rng);
        let casualties = self.casualties.sample(severity, rng);

        let id = self.next_id;
        self.next_id += 1;

        AccidentRecord {
            id,
            date: moment.date,
            time: moment.time,
            latitude: place.latitude,
            longitude: place.longitude,
            severity,
            road_condition,
            weather,
            vehicles_involved,
            injuries: casualties.injuries,
            fatalities: casualties.fatalities,
            accident_cause,
            traffic_density,
            lane_utilization,
            nearby_accidents,
        }
    }

    /// Generate `count` records lazily.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_, R> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a, R> {
    generator: &'a mut AccidentGenerator<R>,
    remaining: u64,
}

impl<R: Rng> Iterator for RecordIterator<'_, R> {
    type Item = AccidentRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RecordIterator<'_, R> {}
