//! Synthetic traffic-accident generator.
//!
//! This crate provides the [`AccidentGenerator`], which produces one
//! [`AccidentRecord`](accident_core::AccidentRecord) per call by running a
//! fixed chain of conditional samplers. Each sampler derives its field from
//! fields sampled earlier in the same row, so the output never contradicts
//! itself (heavy traffic always means congested lanes, low severity always
//! means no casualties, and so on).
//!
//! # Architecture
//!
//! ```text
//! timestamp ──► season ──► weather ──► road ──► severity ──► cause
//!     │                       │          │          │
//!     │                       └──────────┴──► cause │
//!     ▼                                             ▼
//!   hour ──► traffic ◄── near_city ◄── geo     casualties
//!               │            │
//!               ├──► lane ◄──┼──── severity
//!               └──► nearby ◄┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use accident_core::RegionProfile;
//! use accident_generator::AccidentGenerator;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let profile = RegionProfile::default();
//! let mut generator = AccidentGenerator::new(&profile, StdRng::seed_from_u64(7)).unwrap();
//! let record = generator.next_record();
//! assert_eq!(record.id, 1);
//! ```
//!
//! Runs are not reproducible by default: [`AccidentGenerator::from_entropy`]
//! seeds from the operating system. Pass an explicit RNG to
//! [`AccidentGenerator::new`] when determinism is needed.

mod error;
pub mod generator;
pub mod samplers;

// Re-exports for convenience
pub use error::GeneratorError;
pub use generator::{AccidentGenerator, RecordIterator};
pub use samplers::{weighted_choice, ConditionalSampler, WeightError, WeightedChoice};
