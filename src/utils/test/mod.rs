//! Test utilities
//!
//! Fixture builders shared by the unit and integration tests.

pub mod fixtures;

// Re-export commonly used functions for convenience
pub use fixtures::{ReferenceEntryBuilder, TumorBuilder, metastatic_episode, patient, random_cohort};
