//! Product-limit (Kaplan-Meier) survival estimator
//!
//! Censored observations leave the risk set without counting as failures,
//! which moves the estimated median later than the raw median of the
//! observed times.

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::measurement::Measurement;
use crate::models::SurvivalObservation;

/// Tolerance when comparing accumulated survival probabilities to quantiles
///
/// Products such as 11/12 * 10/11 * 9/10 should reach 0.75 exactly but may
/// land a few ulps above it.
pub const SURVIVAL_TOLERANCE: f64 = 1e-9;

/// Survival probability marking the lower quartile survival time
pub const LOWER_QUARTILE: f64 = 0.75;
/// Survival probability marking the median survival time
pub const MEDIAN: f64 = 0.5;
/// Survival probability marking the upper quartile survival time
pub const UPPER_QUARTILE: f64 = 0.25;

/// One step of the estimated survival curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurvivalStep {
    /// Distinct observation time
    pub time_days: i32,
    /// Survival probability after this time
    pub survival: f64,
    /// Number at risk just before this time
    pub at_risk: usize,
    /// Events at this time
    pub events: usize,
    /// Censorings at this time
    pub censored: usize,
}

/// Estimated survival curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KaplanMeierCurve {
    steps: Vec<SurvivalStep>,
}

impl KaplanMeierCurve {
    /// Estimate the survival curve of a set of observations
    ///
    /// Distinct times are processed in ascending order. At each time the
    /// events are applied to a risk set that still contains the censorings of
    /// that same time; afterwards both leave the risk set.
    #[must_use]
    pub fn estimate(observations: &[SurvivalObservation]) -> Self {
        let sorted = observations
            .iter()
            .copied()
            .sorted_by_key(|observation| observation.time_days)
            .collect_vec();

        let mut at_risk = sorted.len();
        let mut survival = 1.0_f64;
        let mut steps = Vec::new();

        let by_time = sorted.iter().chunk_by(|observation| observation.time_days);
        for (time_days, group) in &by_time {
            let (events, censored) = group.fold((0_usize, 0_usize), |(e, c), observation| {
                if observation.event_occurred {
                    (e + 1, c)
                } else {
                    (e, c + 1)
                }
            });

            survival = survival * (at_risk - events) as f64 / at_risk as f64;
            steps.push(SurvivalStep {
                time_days,
                survival,
                at_risk,
                events,
                censored,
            });
            at_risk -= events + censored;
        }

        Self { steps }
    }

    /// Steps of the curve in ascending time order
    #[must_use]
    pub fn steps(&self) -> &[SurvivalStep] {
        &self.steps
    }

    /// First time at which survival dropped to `probability` or below
    #[must_use]
    pub fn time_at_survival(&self, probability: f64) -> Option<i32> {
        self.steps
            .iter()
            .find(|step| step.survival <= probability + SURVIVAL_TOLERANCE)
            .map(|step| step.time_days)
    }

    /// Median survival time, `None` if survival never reached 50%
    #[must_use]
    pub fn median(&self) -> Option<i32> {
        self.time_at_survival(MEDIAN)
    }

    /// Lower and upper quartile survival times
    #[must_use]
    pub fn quartiles(&self) -> (Option<i32>, Option<i32>) {
        (
            self.time_at_survival(LOWER_QUARTILE),
            self.time_at_survival(UPPER_QUARTILE),
        )
    }
}

/// Summarize observations into a survival `Measurement`
///
/// The value is the median survival time and `iqr` the distance between the
/// quartile survival times; either is NaN when the curve never reaches the
/// corresponding probability. `min`/`max` cover censored and uncensored times.
#[must_use]
pub fn survival_measurement(observations: &[SurvivalObservation]) -> Measurement {
    if observations.is_empty() {
        return Measurement::empty();
    }

    let curve = KaplanMeierCurve::estimate(observations);
    let median = curve.median().map_or(f64::NAN, f64::from);
    let iqr = match curve.quartiles() {
        (Some(lower), Some(upper)) => f64::from(upper - lower),
        _ => f64::NAN,
    };

    let times = observations.iter().map(|observation| observation.time_days);
    Measurement {
        value: median,
        num_patients: observations.len(),
        min: times.clone().min(),
        max: times.max(),
        iqr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_with_tied_event_and_censoring() {
        let observations = [
            SurvivalObservation::event(10),
            SurvivalObservation::censored(15),
            SurvivalObservation::event(20),
            SurvivalObservation::event(20),
        ];
        let curve = KaplanMeierCurve::estimate(&observations);
        let steps = curve.steps();

        assert_eq!(steps.len(), 3);
        assert!((steps[0].survival - 0.75).abs() < 1e-12);
        assert_eq!(steps[0].at_risk, 4);
        assert!((steps[1].survival - 0.75).abs() < 1e-12);
        assert_eq!(steps[1].censored, 1);
        assert_eq!(steps[2].at_risk, 2);
        assert_eq!(steps[2].events, 2);
        assert!(steps[2].survival.abs() < 1e-12);
    }

    #[test]
    fn test_censoring_at_event_time_stays_at_risk() {
        let observations = [
            SurvivalObservation::event(5),
            SurvivalObservation::censored(5),
        ];
        let curve = KaplanMeierCurve::estimate(&observations);
        assert_eq!(curve.steps().len(), 1);
        assert!((curve.steps()[0].survival - 0.5).abs() < 1e-12);
        assert_eq!(curve.median(), Some(5));
    }

    #[test]
    fn test_all_censored_has_no_median() {
        let observations = [
            SurvivalObservation::censored(100),
            SurvivalObservation::censored(200),
        ];
        let measurement = survival_measurement(&observations);
        assert!(measurement.value.is_nan());
        assert!(measurement.iqr.is_nan());
        assert_eq!(measurement.num_patients, 2);
        assert_eq!(measurement.min, Some(100));
        assert_eq!(measurement.max, Some(200));
    }

    #[test]
    fn test_empty_observations() {
        let measurement = survival_measurement(&[]);
        assert!(measurement.value.is_nan());
        assert_eq!(measurement.num_patients, 0);
        assert_eq!(measurement.min, None);
        assert_eq!(measurement.max, None);
        assert!(measurement.iqr.is_nan());
    }
}
