//! Rendering of measurements as report cells

use crate::config::AnalysisConfig;

use super::types::{Measurement, MeasurementType};

/// Prefix of the caveat shown instead of an unreliable estimate
pub const SMALL_SAMPLE_MARKER: &str = "n≤";

/// Text shown for undefined values
pub const NOT_AVAILABLE: &str = "NA";

fn small_sample_caveat(config: &AnalysisConfig) -> String {
    format!("{SMALL_SAMPLE_MARKER}{}", config.min_patients_for_estimate)
}

fn percentage(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{:.*}%", decimals, value * 100.0)
    }
}

fn days(value: f64) -> String {
    if value.is_nan() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{value:.0}")
    }
}

impl MeasurementType {
    /// Render a measurement as a table cell
    ///
    /// Estimates over `min_patients_for_estimate` patients or fewer are
    /// replaced by the sample-size caveat. Treatment decisions are counts, not
    /// estimates, and are never suppressed.
    #[must_use]
    pub fn render_cell(&self, measurement: &Measurement, config: &AnalysisConfig) -> String {
        let suppressed = measurement.num_patients <= config.min_patients_for_estimate;
        match self {
            Self::TreatmentDecision => percentage(measurement.value, config.decimals),
            Self::PercentProgressionFreeAt { .. } if suppressed => small_sample_caveat(config),
            Self::PercentProgressionFreeAt { .. } => percentage(measurement.value, config.decimals),
            Self::Survival(_) if suppressed => small_sample_caveat(config),
            Self::Survival(_) => {
                format!("{} ({})", days(measurement.value), days(measurement.iqr))
            }
        }
    }
}
