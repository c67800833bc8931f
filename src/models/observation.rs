//! Dated observations on a clinical axis

use serde::{Deserialize, Serialize};

/// A value observed on some day relative to the primary diagnosis
///
/// Observations of one axis are treated as an unordered set; producers do not
/// have to sort them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedObservation<V> {
    /// Days between primary diagnosis and the observation, `None` if undated
    pub days_since_diagnosis: Option<i32>,
    /// The observed value
    pub value: V,
}

impl<V> TimedObservation<V> {
    /// Create a dated observation
    #[must_use]
    pub const fn new(days_since_diagnosis: i32, value: V) -> Self {
        Self {
            days_since_diagnosis: Some(days_since_diagnosis),
            value,
        }
    }

    /// Create an observation without a known day
    #[must_use]
    pub const fn undated(value: V) -> Self {
        Self {
            days_since_diagnosis: None,
            value,
        }
    }

    /// Whether the observation is known to have happened on or before `cutoff_days`
    #[must_use]
    pub fn is_known_by(&self, cutoff_days: i32) -> bool {
        self.days_since_diagnosis
            .is_some_and(|day| day <= cutoff_days)
    }
}
