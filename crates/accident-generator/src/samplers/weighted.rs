//! Weighted categorical draws.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;

/// Error building a weighted choice.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    /// Outcomes and weights differ in length
    #[error("{values} outcomes but {weights} weights")]
    LengthMismatch { values: usize, weights: usize },

    /// Weights add up to more than a `u32` can hold
    #[error("weights sum to more than {}", u32::MAX)]
    Overflow,

    /// Empty, all zero, or otherwise unusable weights
    #[error("{0}")]
    Invalid(#[from] WeightedError),
}

/// A fixed set of outcomes with relative weights.
///
/// Weights need not sum to anything in particular; they are normalised
/// internally. Building validates the table once so that sampling is
/// infallible.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    values: Vec<T>,
    index: WeightedIndex<u32>,
}

impl<T: Copy> WeightedChoice<T> {
    pub fn new(values: &[T], weights: &[u32]) -> Result<Self, WeightError> {
        if values.len() != weights.len() {
            return Err(WeightError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }

        weights
            .iter()
            .try_fold(0u32, |total, &w| total.checked_add(w))
            .ok_or(WeightError::Overflow)?;

        Ok(Self {
            values: values.to_vec(),
            index: WeightedIndex::new(weights)?,
        })
    }

    /// Draw one outcome.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)]
    }
}

/// One-shot weighted draw, for callers that do not keep the table around.
pub fn weighted_choice<T: Copy, R: Rng + ?Sized>(
    values: &[T],
    weights: &[u32],
    rng: &mut R,
) -> Result<T, WeightError> {
    Ok(WeightedChoice::new(values, weights)?.sample(rng))
}
