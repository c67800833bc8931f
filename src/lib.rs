//! Outcome analytics for metastatic tumor registry data.
//!
//! Reconstructs what was known about a patient at metastatic diagnosis and at
//! systemic treatment start, stratifies tumors by treatment group and clinical
//! sub-population, and estimates survival from right-censored observations.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::AnalysisConfig;
pub use error::{OutcomeError, Result};
pub use models::{
    PatientRecord, ReferenceEntry, SurvivalObservation, TREATMENT_GROUP_TABLE, TreatmentGroup,
    Tumor,
};

// Temporal interpretation
pub use algorithm::temporal::{resolve_as_of, resolve_as_of_by};

// Populations and measurements
pub use algorithm::measurement::{Measurement, MeasurementType, SurvivalEndpoint};
pub use algorithm::population::{
    PopulationDefinition, PopulationFilter, build_reference_entries, stratify_by_treatment,
};
pub use algorithm::survival::KaplanMeierCurve;

// Breakdown
pub use algorithm::breakdown::{AnalysisRequest, BreakdownResult, PopulationBreakdown, render_table};
