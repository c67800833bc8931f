//! Measurements computed over filtered sub-populations
//!
//! A `MeasurementType` is one of a fixed set of calculations. Every kind
//! decides which entries are eligible, computes a `Measurement` from the
//! eligible entries and renders it as a report cell.

pub mod calculation;
pub mod render;
pub mod types;

pub use render::SMALL_SAMPLE_MARKER;
pub use types::{Measurement, MeasurementType, SurvivalEndpoint, default_measurement_types};
