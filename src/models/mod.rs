//! Domain models for tumor outcome analyses
//!
//! This module contains the timelines of a tumor (metastases, treatment
//! episodes, dated clinical assessments) and the flat per-tumor reference
//! entry that population stratification works on.

pub mod clinical;
pub mod observation;
pub mod reference;
pub mod survival;
pub mod treatment;
pub mod tumor;

// Re-export commonly used types
pub use clinical::{AsaClass, Comorbidities, Gene, LabAnalyte, LabValue, MolecularResult, Sex};
pub use observation::TimedObservation;
pub use reference::{ClinicalState, ReferenceEntry};
pub use survival::SurvivalObservation;
pub use treatment::{
    Drug, RegimenComponent, RegimenRule, SystemicTreatment, TREATMENT_GROUP_TABLE, TreatmentGroup,
    classify_drugs,
};
pub use tumor::{
    LocationGroup, Metastasis, MetastasisLocation, MetastaticDiagnosis, MetastaticPresence,
    PatientRecord, ProgressionMeasure, ProgressionMeasureType, SurvivalMeasurement,
    TreatmentEpisode, Tumor,
};
