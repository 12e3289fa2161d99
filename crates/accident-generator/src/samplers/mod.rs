//! Conditional samplers, one per derived field.
//!
//! Every sampler is built once from the profile and is then a pure function
//! of its conditioning inputs plus the random source. Where a sampler picks
//! between several weight tables, the choice is a `match` whose arms are
//! evaluated top to bottom: the first arm that matches wins, so arm order is
//! part of the contract.

pub mod casualty;
pub mod geo;
pub mod severity;
pub mod temporal;
pub mod traffic;
pub mod weather;
mod weighted;

use crate::GeneratorError;
use rand::Rng;

pub use casualty::{Casualties, CasualtySampler};
pub use geo::{GeoPlacement, GeoSampler};
pub use severity::{CauseSampler, SeveritySampler};
pub use temporal::{Moment, TemporalSampler};
pub use traffic::{is_rush_hour, LaneSampler, NearbyAccidentsSampler, TrafficSampler};
pub use weather::{RoadConditionSampler, WeatherSampler};
pub use weighted::{weighted_choice, WeightError, WeightedChoice};

/// Trait for deriving one field from previously sampled ones.
pub trait ConditionalSampler {
    /// Conditioning inputs.
    type Input;
    /// Sampled value.
    type Output;

    /// Sample a value for the given inputs.
    fn sample<R: Rng + ?Sized>(&self, input: Self::Input, rng: &mut R) -> Self::Output;
}

/// Build a named weight table, attaching the table name to any error.
pub(crate) fn table<T: Copy>(
    name: &'static str,
    values: &[T],
    weights: &[u32],
) -> Result<WeightedChoice<T>, GeneratorError> {
    WeightedChoice::new(values, weights).map_err(|source| GeneratorError::Weights {
        table: name,
        source,
    })
}
