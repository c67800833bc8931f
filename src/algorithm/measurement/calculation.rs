//! Eligibility and computation of each measurement kind

use crate::algorithm::survival::survival_measurement;
use crate::models::{ReferenceEntry, SurvivalObservation};

use super::types::{Measurement, MeasurementType, SurvivalEndpoint};

impl SurvivalEndpoint {
    /// Observed duration of an entry for this endpoint
    #[must_use]
    pub fn observation(self, entry: &ReferenceEntry) -> Option<SurvivalObservation> {
        match self {
            Self::OverallFromMetastaticDiagnosis => entry.overall_survival,
            Self::OverallFromTreatmentStart => entry.overall_survival_from_treatment_start,
            Self::ProgressionFree => entry.progression_free_survival,
        }
    }
}

impl MeasurementType {
    /// Whether an entry can contribute to this measurement
    #[must_use]
    pub fn is_eligible(&self, entry: &ReferenceEntry) -> bool {
        match self {
            Self::TreatmentDecision => true,
            Self::PercentProgressionFreeAt { .. } => {
                entry.days_to_systemic_treatment_start.is_some()
                    && entry.progression_free_survival.is_some()
            }
            Self::Survival(endpoint) => endpoint.observation(entry).is_some(),
        }
    }

    /// Compute the measurement over eligible entries
    ///
    /// `population_size` is the number of entries of the whole sub-population
    /// (across all treatment groups) eligible for this measurement; only
    /// proportion-of-population measurements use it.
    #[must_use]
    pub fn calculate(&self, eligible: &[&ReferenceEntry], population_size: usize) -> Measurement {
        match self {
            Self::TreatmentDecision => treatment_decision(eligible.len(), population_size),
            Self::PercentProgressionFreeAt { days } => progression_free_at(eligible, *days),
            Self::Survival(endpoint) => {
                let observations: Vec<SurvivalObservation> = eligible
                    .iter()
                    .filter_map(|entry| endpoint.observation(entry))
                    .collect();
                survival_measurement(&observations)
            }
        }
    }
}

fn treatment_decision(treated: usize, population_size: usize) -> Measurement {
    let value = if population_size == 0 {
        f64::NAN
    } else {
        treated as f64 / population_size as f64
    };

    Measurement {
        value,
        num_patients: treated,
        min: None,
        max: None,
        iqr: f64::NAN,
    }
}

fn progression_free_at(eligible: &[&ReferenceEntry], threshold_days: i32) -> Measurement {
    let days: Vec<i32> = eligible
        .iter()
        .filter_map(|entry| entry.progression_free_survival)
        .map(|observation| observation.time_days)
        .collect();
    if days.is_empty() {
        return Measurement::empty();
    }

    let still_free = days.iter().filter(|day| **day >= threshold_days).count();
    Measurement {
        value: still_free as f64 / days.len() as f64,
        num_patients: days.len(),
        min: days.iter().min().copied(),
        max: days.iter().max().copied(),
        iqr: f64::NAN,
    }
}
