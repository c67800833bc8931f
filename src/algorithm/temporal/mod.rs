//! Temporal interpretation of tumor timelines
//!
//! This module answers "what was known at day D" questions: the most recent
//! value of a clinical axis as of a cutoff, and the anchor days (metastatic
//! diagnosis, systemic treatment start) those cutoffs are taken from.

pub mod anchors;
pub mod as_of;
pub mod axes;

// Re-export commonly used functions
pub use anchors::{
    days_between_diagnosis_and_systemic_treatment_start,
    days_between_primary_and_metastatic_diagnosis, first_event_after_treatment_start,
    first_progression_after_treatment_start, metastatic_treatment_episode,
    overall_survival_from_metastatic_diagnosis, overall_survival_from_treatment_start,
    progression_free_survival,
};
pub use as_of::{resolve_as_of, resolve_as_of_by};
pub use axes::{
    asa_class_at, clinical_state_at, comorbidities_at, lab_value_at, molecular_result_at,
    who_status_at,
};
