//! Measurement values and measurement kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output of one calculation over one sub-population
///
/// `value` and `iqr` are NaN when undefined; callers check `num_patients`
/// before trusting `value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub value: f64,
    pub num_patients: usize,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub iqr: f64,
}

impl Measurement {
    /// Measurement of an empty population
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: f64::NAN,
            num_patients: 0,
            min: None,
            max: None,
            iqr: f64::NAN,
        }
    }

    /// Bit-for-bit equality, treating identical NaNs as equal
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.value.to_bits() == other.value.to_bits()
            && self.iqr.to_bits() == other.iqr.to_bits()
            && self.num_patients == other.num_patients
            && self.min == other.min
            && self.max == other.max
    }
}

/// Origin and event of a survival duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurvivalEndpoint {
    /// Death, counted from metastatic diagnosis
    OverallFromMetastaticDiagnosis,
    /// Death, counted from systemic treatment start
    OverallFromTreatmentStart,
    /// Progression, counted from systemic treatment start
    ProgressionFree,
}

impl SurvivalEndpoint {
    /// Short display name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OverallFromMetastaticDiagnosis => "Median OS",
            Self::OverallFromTreatmentStart => "Median OS from treatment start",
            Self::ProgressionFree => "Median PFS",
        }
    }
}

/// The calculations a breakdown can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementType {
    /// Share of the population that received the treatment group
    TreatmentDecision,
    /// Share of treated patients still progression-free after `days`
    PercentProgressionFreeAt {
        /// Days after treatment start
        days: i32,
    },
    /// Median survival with interquartile range
    Survival(SurvivalEndpoint),
}

impl MeasurementType {
    /// Column label for report tables
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::TreatmentDecision => "Treatment decision".to_string(),
            Self::PercentProgressionFreeAt { days } => format!("Progression-free at {days} days"),
            Self::Survival(endpoint) => endpoint.label().to_string(),
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Measurement kinds reported when a request does not list any
#[must_use]
pub fn default_measurement_types(progression_free_thresholds: &[i32]) -> Vec<MeasurementType> {
    let mut types = vec![
        MeasurementType::TreatmentDecision,
        MeasurementType::Survival(SurvivalEndpoint::OverallFromMetastaticDiagnosis),
        MeasurementType::Survival(SurvivalEndpoint::ProgressionFree),
    ];
    types.extend(
        progression_free_thresholds
            .iter()
            .map(|days| MeasurementType::PercentProgressionFreeAt { days: *days }),
    );
    types
}
