//! accident-synth: synthetic traffic-accident dataset generator.
//!
//! The heavy lifting lives in the workspace crates; this crate wires them
//! to the command line.
//!
//! - `accident-core` - record types and region profiles
//! - `accident-generator` - conditional samplers and the row pipeline
//! - `accident-csv` - record <-> CSV field conversion
//! - `accident-populate-csv` - writes datasets to disk

pub mod generate;

pub use generate::{render_profile, run_generate};
