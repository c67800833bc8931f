//! Observed survival durations

use serde::{Deserialize, Serialize};

/// Observed duration of one patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivalObservation {
    /// Days from the origin to the event or to last contact
    pub time_days: i32,
    /// `false` marks a right-censored observation
    pub event_occurred: bool,
}

impl SurvivalObservation {
    #[must_use]
    pub const fn new(time_days: i32, event_occurred: bool) -> Self {
        Self {
            time_days,
            event_occurred,
        }
    }

    /// An observed event at `time_days`
    #[must_use]
    pub const fn event(time_days: i32) -> Self {
        Self::new(time_days, true)
    }

    /// A censored observation at `time_days`
    #[must_use]
    pub const fn censored(time_days: i32) -> Self {
        Self::new(time_days, false)
    }
}
