//! Traffic density, lane utilisation and nearby-accident sampling.

use super::{table, ConditionalSampler, WeightedChoice};
use crate::GeneratorError;
use accident_core::{LaneUtilization, LaneWeights, Severity, TrafficDensity, TrafficWeights};
use rand::Rng;
use std::ops::RangeInclusive;

/// Morning (08:00-11:59) and evening (17:00-20:59) rush hours.
pub fn is_rush_hour(hour: u32) -> bool {
    matches!(hour, 8..=11 | 17..=20)
}

/// Traffic density conditioned on hour of day and urban placement.
///
/// Each of the four (rush hour, near city) combinations has its own table,
/// biased further towards heavy traffic as more of the two hold.
#[derive(Debug, Clone)]
pub struct TrafficSampler {
    rush_hour_urban: WeightedChoice<TrafficDensity>,
    urban: WeightedChoice<TrafficDensity>,
    rush_hour_rural: WeightedChoice<TrafficDensity>,
    rural: WeightedChoice<TrafficDensity>,
}

impl TrafficSampler {
    pub fn new(weights: &TrafficWeights) -> Result<Self, GeneratorError> {
        Ok(Self {
            rush_hour_urban: table(
                "traffic.rush_hour_urban",
                TrafficDensity::ALL,
                &weights.rush_hour_urban,
            )?,
            urban: table("traffic.urban", TrafficDensity::ALL, &weights.urban)?,
            rush_hour_rural: table(
                "traffic.rush_hour_rural",
                TrafficDensity::ALL,
                &weights.rush_hour_rural,
            )?,
            rural: table("traffic.rural", TrafficDensity::ALL, &weights.rural)?,
        })
    }
}

impl ConditionalSampler for TrafficSampler {
    /// (hour of day, near city)
    type Input = (u32, bool);
    type Output = TrafficDensity;

    fn sample<R: Rng + ?Sized>(&self, (hour, near_city): Self::Input, rng: &mut R) -> TrafficDensity {
        let table = match (is_rush_hour(hour), near_city) {
            (true, true) => &self.rush_hour_urban,
            (false, true) => &self.urban,
            (true, false) => &self.rush_hour_rural,
            (false, false) => &self.rural,
        };
        table.sample(rng)
    }
}

/// Lane utilisation conditioned on traffic density and severity.
///
/// Policy, first match wins:
/// 1. heavy traffic: always `Congested Multi-Lane`
/// 2. high or critical severity: lane change or overtaking
/// 3. anything else: single lane or lane change
#[derive(Debug, Clone)]
pub struct LaneSampler {
    serious: WeightedChoice<LaneUtilization>,
    minor: WeightedChoice<LaneUtilization>,
}

impl LaneSampler {
    pub fn new(weights: &LaneWeights) -> Result<Self, GeneratorError> {
        Ok(Self {
            serious: table(
                "lane.serious",
                &[LaneUtilization::LaneChange, LaneUtilization::Overtaking],
                &weights.serious,
            )?,
            minor: table(
                "lane.minor",
                &[LaneUtilization::SingleLane, LaneUtilization::LaneChange],
                &weights.minor,
            )?,
        })
    }
}

impl ConditionalSampler for LaneSampler {
    type Input = (TrafficDensity, Severity);
    type Output = LaneUtilization;

    fn sample<R: Rng + ?Sized>(
        &self,
        (traffic, severity): Self::Input,
        rng: &mut R,
    ) -> LaneUtilization {
        match (traffic, severity) {
            (TrafficDensity::Heavy, _) => LaneUtilization::CongestedMultiLane,
            (_, s) if s.is_serious() => self.serious.sample(rng),
            _ => self.minor.sample(rng),
        }
    }
}

/// Accidents away from cities.
pub const RURAL_NEARBY: RangeInclusive<u32> = 0..=5;
/// Urban accidents in heavy traffic, before capping.
pub const HEAVY_NEARBY: RangeInclusive<u32> = 20..=60;
/// Upper limit applied to `HEAVY_NEARBY` draws.
pub const HEAVY_NEARBY_CAP: u32 = 50;
pub const MODERATE_NEARBY: RangeInclusive<u32> = 5..=25;
pub const LIGHT_NEARBY: RangeInclusive<u32> = 1..=10;

/// Count of other accidents recorded nearby, conditioned on urban placement
/// and traffic density.
///
/// Heavy urban traffic draws from 20..=60 and caps at 50, so 50 is much more
/// likely than any other value in that branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearbyAccidentsSampler;

impl ConditionalSampler for NearbyAccidentsSampler {
    /// (near city, traffic density)
    type Input = (bool, TrafficDensity);
    type Output = u32;

    fn sample<R: Rng + ?Sized>(&self, (near_city, traffic): Self::Input, rng: &mut R) -> u32 {
        match (near_city, traffic) {
            (false, _) => rng.gen_range(RURAL_NEARBY),
            (true, TrafficDensity::Heavy) => rng.gen_range(HEAVY_NEARBY).min(HEAVY_NEARBY_CAP),
            (true, TrafficDensity::Moderate) => rng.gen_range(MODERATE_NEARBY),
            (true, TrafficDensity::Light) => rng.gen_range(LIGHT_NEARBY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rush_hours() {
        let rush: Vec<u32> = (0..24).filter(|h| is_rush_hour(*h)).collect();
        assert_eq!(rush, vec![8, 9, 10, 11, 17, 18, 19, 20]);
    }

    #[test]
    fn test_traffic_tables_by_combination() {
        let weights = TrafficWeights {
            rush_hour_urban: [0, 0, 1],
            urban: [0, 1, 0],
            rush_hour_rural: [1, 1, 0],
            rural: [1, 0, 0],
        };
        let sampler = TrafficSampler::new(&weights).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(sampler.sample((9, true), &mut rng), TrafficDensity::Heavy);
        assert_eq!(sampler.sample((13, true), &mut rng), TrafficDensity::Moderate);
        assert_eq!(sampler.sample((3, false), &mut rng), TrafficDensity::Light);
        for _ in 0..100 {
            assert_ne!(sampler.sample((18, false), &mut rng), TrafficDensity::Heavy);
        }
    }

    #[test]
    fn test_urban_rush_hour_is_heaviest() {
        let sampler = TrafficSampler::new(&TrafficWeights::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let heavy_share = |hour: u32, near_city: bool, rng: &mut StdRng| {
            let n = 20_000;
            let heavy = (0..n)
                .filter(|_| sampler.sample((hour, near_city), rng) == TrafficDensity::Heavy)
                .count();
            heavy as f64 / n as f64
        };

        let rush_urban = heavy_share(8, true, &mut rng);
        let urban = heavy_share(14, true, &mut rng);
        let rural = heavy_share(2, false, &mut rng);
        assert!(rush_urban > urban && urban > rural);
    }

    #[test]
    fn test_heavy_traffic_is_congested() {
        let sampler = LaneSampler::new(&LaneWeights::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for severity in Severity::ALL {
            assert_eq!(
                sampler.sample((TrafficDensity::Heavy, *severity), &mut rng),
                LaneUtilization::CongestedMultiLane
            );
        }
    }

    #[test]
    fn test_lane_by_severity() {
        let sampler = LaneSampler::new(&LaneWeights::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let serious = sampler.sample((TrafficDensity::Moderate, Severity::High), &mut rng);
            assert!(matches!(
                serious,
                LaneUtilization::LaneChange | LaneUtilization::Overtaking
            ));

            let minor = sampler.sample((TrafficDensity::Light, Severity::Low), &mut rng);
            assert!(matches!(
                minor,
                LaneUtilization::SingleLane | LaneUtilization::LaneChange
            ));
        }
    }

    #[test]
    fn test_nearby_ranges() {
        let sampler = NearbyAccidentsSampler;
        let mut rng = StdRng::seed_from_u64(42);

        let mut heavy_values = Vec::new();
        for _ in 0..5000 {
            for traffic in TrafficDensity::ALL {
                assert!(RURAL_NEARBY.contains(&sampler.sample((false, *traffic), &mut rng)));
            }
            assert!(MODERATE_NEARBY
                .contains(&sampler.sample((true, TrafficDensity::Moderate), &mut rng)));
            assert!(LIGHT_NEARBY.contains(&sampler.sample((true, TrafficDensity::Light), &mut rng)));
            heavy_values.push(sampler.sample((true, TrafficDensity::Heavy), &mut rng));
        }

        assert!(heavy_values.iter().all(|v| (20..=50).contains(v)));
        // 11 of the 41 raw values collapse onto the cap
        let capped = heavy_values.iter().filter(|v| **v == HEAVY_NEARBY_CAP).count();
        let share = capped as f64 / heavy_values.len() as f64;
        assert!((share - 11.0 / 41.0).abs() < 0.03, "capped share was {share}");
    }
}
