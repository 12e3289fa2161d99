//! Severity and cause sampling.

use super::{table, ConditionalSampler, WeightedChoice};
use crate::GeneratorError;
use accident_core::{AccidentCause, CauseWeights, RoadCondition, Severity, SeverityWeights, Weather};
use rand::Rng;

/// Severity conditioned on road and weather.
///
/// Tiers, first match wins:
/// 1. flooding or muddy road, or heavy rain: skewed towards high/critical
/// 2. wet road, or rain: skewed towards medium/high
/// 3. anything else: skewed towards low
#[derive(Debug, Clone)]
pub struct SeveritySampler {
    hazardous: WeightedChoice<Severity>,
    wet: WeightedChoice<Severity>,
    baseline: WeightedChoice<Severity>,
}

impl SeveritySampler {
    pub fn new(weights: &SeverityWeights) -> Result<Self, GeneratorError> {
        Ok(Self {
            hazardous: table("severity.hazardous", Severity::ALL, &weights.hazardous)?,
            wet: table("severity.wet", Severity::ALL, &weights.wet)?,
            baseline: table("severity.baseline", Severity::ALL, &weights.baseline)?,
        })
    }

    fn tier(&self, road: RoadCondition, weather: Weather) -> &WeightedChoice<Severity> {
        match (road, weather) {
            (RoadCondition::Flooding | RoadCondition::Muddy, _) | (_, Weather::HeavyRain) => {
                &self.hazardous
            }
            (RoadCondition::Wet, _) | (_, Weather::Rain) => &self.wet,
            _ => &self.baseline,
        }
    }
}

impl ConditionalSampler for SeveritySampler {
    type Input = (RoadCondition, Weather);
    type Output = Severity;

    fn sample<R: Rng + ?Sized>(&self, (road, weather): Self::Input, rng: &mut R) -> Severity {
        self.tier(road, weather).sample(rng)
    }
}

/// Accident cause conditioned on severity, weather and road.
///
/// Policy, first match wins:
/// 1. heavy rain, fog or dust storm: always `Weather`
/// 2. potholed road, construction or flooding: always `Poor Road`
/// 3. high or critical severity: human error, signal violation or mechanical failure
/// 4. anything else: any cause
#[derive(Debug, Clone)]
pub struct CauseSampler {
    serious: WeightedChoice<AccidentCause>,
    general: WeightedChoice<AccidentCause>,
}

impl CauseSampler {
    pub fn new(weights: &CauseWeights) -> Result<Self, GeneratorError> {
        Ok(Self {
            serious: table(
                "cause.serious",
                &[
                    AccidentCause::HumanError,
                    AccidentCause::SignalViolation,
                    AccidentCause::MechanicalFailure,
                ],
                &weights.serious,
            )?,
            general: table("cause.general", AccidentCause::ALL, &weights.general)?,
        })
    }
}

impl ConditionalSampler for CauseSampler {
    type Input = (Severity, Weather, RoadCondition);
    type Output = AccidentCause;

    fn sample<R: Rng + ?Sized>(
        &self,
        (severity, weather, road): Self::Input,
        rng: &mut R,
    ) -> AccidentCause {
        match (severity, weather, road) {
            (_, w, _) if w.is_severe() => AccidentCause::Weather,
            (_, _, r) if r.is_poor() => AccidentCause::PoorRoad,
            (s, _, _) if s.is_serious() => self.serious.sample(rng),
            _ => self.general.sample(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn only(severity: Severity) -> [u32; 4] {
        let mut weights = [0; 4];
        weights[Severity::ALL.iter().position(|s| *s == severity).unwrap()] = 1;
        weights
    }

    /// Each tier pinned to a single severity so the chosen tier is observable.
    fn pinned_sampler() -> SeveritySampler {
        SeveritySampler::new(&SeverityWeights {
            hazardous: only(Severity::Critical),
            wet: only(Severity::Medium),
            baseline: only(Severity::Low),
        })
        .unwrap()
    }

    #[test]
    fn test_severity_tiers() {
        let sampler = pinned_sampler();
        let mut rng = StdRng::seed_from_u64(42);

        let cases = [
            (RoadCondition::Flooding, Weather::Clear, Severity::Critical),
            (RoadCondition::Muddy, Weather::DustStorm, Severity::Critical),
            (RoadCondition::Dry, Weather::HeavyRain, Severity::Critical),
            (RoadCondition::Wet, Weather::Fog, Severity::Medium),
            (RoadCondition::Dry, Weather::Rain, Severity::Medium),
            (RoadCondition::Potholed, Weather::Cloudy, Severity::Low),
            (RoadCondition::Construction, Weather::Fog, Severity::Low),
        ];
        for (road, weather, expected) in cases {
            assert_eq!(
                sampler.sample((road, weather), &mut rng),
                expected,
                "road={road}, weather={weather}"
            );
        }
    }

    #[test]
    fn test_hazardous_tier_wins_over_wet() {
        let sampler = pinned_sampler();
        let mut rng = StdRng::seed_from_u64(42);
        // Wet road with heavy rain matches both tiers; the hazardous one is first.
        assert_eq!(
            sampler.sample((RoadCondition::Wet, Weather::HeavyRain), &mut rng),
            Severity::Critical
        );
        // Flooding while merely raining is still hazardous.
        assert_eq!(
            sampler.sample((RoadCondition::Flooding, Weather::Rain), &mut rng),
            Severity::Critical
        );
    }

    #[test]
    fn test_weather_cause_takes_priority() {
        let sampler = CauseSampler::new(&CauseWeights::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for weather in [Weather::HeavyRain, Weather::Fog, Weather::DustStorm] {
            for road in RoadCondition::ALL {
                for severity in Severity::ALL {
                    assert_eq!(
                        sampler.sample((*severity, weather, *road), &mut rng),
                        AccidentCause::Weather
                    );
                }
            }
        }
    }

    #[test]
    fn test_poor_road_cause() {
        let sampler = CauseSampler::new(&CauseWeights::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for road in [
            RoadCondition::Potholed,
            RoadCondition::Construction,
            RoadCondition::Flooding,
        ] {
            for weather in [Weather::Clear, Weather::Cloudy, Weather::Rain] {
                assert_eq!(
                    sampler.sample((Severity::Critical, weather, road), &mut rng),
                    AccidentCause::PoorRoad
                );
            }
        }
    }

    #[test]
    fn test_serious_accidents_have_restricted_causes() {
        let sampler = CauseSampler::new(&CauseWeights::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..2000 {
            for severity in [Severity::High, Severity::Critical] {
                let cause = sampler.sample((severity, Weather::Clear, RoadCondition::Dry), &mut rng);
                assert!(matches!(
                    cause,
                    AccidentCause::HumanError
                        | AccidentCause::SignalViolation
                        | AccidentCause::MechanicalFailure
                ));
            }
        }
    }

    #[test]
    fn test_minor_accidents_use_general_table() {
        let weights = CauseWeights {
            serious: [1, 1, 1],
            general: [0, 0, 0, 0, 1, 0],
        };
        let sampler = CauseSampler::new(&weights).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(
            sampler.sample((Severity::Low, Weather::Rain, RoadCondition::Wet), &mut rng),
            AccidentCause::AnimalCrossing
        );
        assert_eq!(
            sampler.sample((Severity::Medium, Weather::Clear, RoadCondition::Muddy), &mut rng),
            AccidentCause::AnimalCrossing
        );
    }
}
