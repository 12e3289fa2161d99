//! Injury and fatality counts.

use super::ConditionalSampler;
use accident_core::Severity;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Casualties {
    pub injuries: u32,
    pub fatalities: u32,
}

/// Injuries and fatalities conditioned on severity.
///
/// | severity | injuries | fatalities |
/// |----------|----------|------------|
/// | Critical | 2..=8    | 0..=3      |
/// | High     | 1..=4    | 0..=1      |
/// | Medium   | 0..=2    | 0          |
/// | Low      | 0        | 0          |
#[derive(Debug, Clone, Copy, Default)]
pub struct CasualtySampler;

impl ConditionalSampler for CasualtySampler {
    type Input = Severity;
    type Output = Casualties;

    fn sample<R: Rng + ?Sized>(&self, severity: Severity, rng: &mut R) -> Casualties {
        match severity {
            Severity::Critical => Casualties {
                injuries: rng.gen_range(2..=8),
                fatalities: rng.gen_range(0..=3),
            },
            Severity::High => Casualties {
                injuries: rng.gen_range(1..=4),
                fatalities: rng.gen_range(0..=1),
            },
            Severity::Medium => Casualties {
                injuries: rng.gen_range(0..=2),
                fatalities: 0,
            },
            Severity::Low => Casualties::default(),
        }
    }
}
