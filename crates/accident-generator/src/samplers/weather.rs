//! Weather and road condition sampling.

use super::{table, ConditionalSampler, WeightedChoice};
use crate::GeneratorError;
use accident_core::{RoadCondition, RoadWeights, Season, Weather, WeatherWeights};
use rand::Rng;

/// Weather conditioned on the season.
#[derive(Debug, Clone)]
pub struct WeatherSampler {
    monsoon: WeightedChoice<Weather>,
    summer: WeightedChoice<Weather>,
    winter: WeightedChoice<Weather>,
}

impl WeatherSampler {
    pub fn new(weights: &WeatherWeights) -> Result<Self, GeneratorError> {
        Ok(Self {
            monsoon: table("weather.monsoon", Weather::ALL, &weights.monsoon)?,
            summer: table("weather.summer", Weather::ALL, &weights.summer)?,
            winter: table("weather.winter", Weather::ALL, &weights.winter)?,
        })
    }
}

impl ConditionalSampler for WeatherSampler {
    type Input = Season;
    type Output = Weather;

    fn sample<R: Rng + ?Sized>(&self, season: Season, rng: &mut R) -> Weather {
        match season {
            Season::Monsoon => self.monsoon.sample(rng),
            Season::Summer => self.summer.sample(rng),
            Season::Winter => self.winter.sample(rng),
        }
    }
}

/// Road condition conditioned on the weather.
///
/// Rain and fog draw from `Wet`/`Flooding`/`Muddy`, a dust storm always
/// leaves the road muddy, and clear or cloudy skies draw from
/// `Dry`/`Potholed`/`Construction`.
#[derive(Debug, Clone)]
pub struct RoadConditionSampler {
    wet: WeightedChoice<RoadCondition>,
    dry: WeightedChoice<RoadCondition>,
}

impl RoadConditionSampler {
    pub fn new(weights: &RoadWeights) -> Result<Self, GeneratorError> {
        Ok(Self {
            wet: table(
                "road.wet",
                &[RoadCondition::Wet, RoadCondition::Flooding, RoadCondition::Muddy],
                &weights.wet,
            )?,
            dry: table(
                "road.dry",
                &[
                    RoadCondition::Dry,
                    RoadCondition::Potholed,
                    RoadCondition::Construction,
                ],
                &weights.dry,
            )?,
        })
    }
}

impl ConditionalSampler for RoadConditionSampler {
    type Input = Weather;
    type Output = RoadCondition;

    fn sample<R: Rng + ?Sized>(&self, weather: Weather, rng: &mut R) -> RoadCondition {
        match weather {
            Weather::Rain | Weather::HeavyRain | Weather::Fog => self.wet.sample(rng),
            Weather::DustStorm => RoadCondition::Muddy,
            Weather::Clear | Weather::Cloudy => self.dry.sample(rng),
        }
    }
}
