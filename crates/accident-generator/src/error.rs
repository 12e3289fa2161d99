//! Error type for generator construction.

use crate::samplers::WeightError;
use accident_core::ProfileError;

/// Errors raised while building a generator from a profile.
///
/// Sampling itself never fails; every problem is caught here, before the
/// first row is produced.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The profile failed validation
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// A weight table cannot be sampled from
    #[error("Weight table '{table}': {source}")]
    Weights {
        table: &'static str,
        #[source]
        source: WeightError,
    },
}
