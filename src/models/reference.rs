//! Flat per-tumor reference entries
//!
//! A `ReferenceEntry` is the unit of population stratification. It keeps the
//! raw tumor timelines next to everything derived from them at the anchor
//! days: the clinical state, the treatment group of the first metastatic
//! systemic treatment and the observed survival durations.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::clinical::{AsaClass, Comorbidities, LabAnalyte, MolecularResult, Sex};
use super::survival::SurvivalObservation;
use super::treatment::TreatmentGroup;
use super::tumor::{LocationGroup, Tumor};

/// Clinical axes resolved as of the anchor days of a tumor
///
/// Molecular results may be resolved at a later anchor than the other axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalState {
    /// WHO performance status (0-4)
    pub who_status: Option<i32>,
    pub asa_class: Option<AsaClass>,
    pub comorbidities: Option<Comorbidities>,
    pub molecular: Option<MolecularResult>,
    /// Most recent value per analyte; analytes without a value are absent
    pub lab_values: BTreeMap<LabAnalyte, f64>,
}

impl ClinicalState {
    /// Charlson comorbidity index, if comorbidities were assessed
    #[must_use]
    pub fn charlson_comorbidity_index(&self) -> Option<u32> {
        self.comorbidities
            .as_ref()
            .map(Comorbidities::charlson_comorbidity_index)
    }

    /// Lab value for one analyte
    #[must_use]
    pub fn lab_value(&self, analyte: LabAnalyte) -> Option<f64> {
        self.lab_values.get(&analyte).copied()
    }
}

/// One row per metastatic tumor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub patient_id: u64,
    pub sex: Sex,
    /// Age in years at primary diagnosis
    pub age_at_diagnosis: u32,
    /// Calendar year of primary diagnosis
    pub diagnosis_year: i32,
    /// The raw tumor timelines
    pub tumor: Tumor,
    /// Days between primary and metastatic diagnosis
    pub days_to_metastatic_diagnosis: i32,
    /// Days between primary diagnosis and start of the first metastatic systemic treatment
    pub days_to_systemic_treatment_start: Option<i32>,
    /// Treatment group of the first metastatic systemic treatment
    pub treatment_group: Option<TreatmentGroup>,
    /// Clinical axes as of metastatic diagnosis, with molecular results as of
    /// treatment start when it is known
    pub clinical_state: ClinicalState,
    /// Location groups of metastases known before systemic treatment started
    pub metastasis_location_groups: BTreeSet<LocationGroup>,
    /// Overall survival counted from metastatic diagnosis
    pub overall_survival: Option<SurvivalObservation>,
    /// Overall survival counted from systemic treatment start
    pub overall_survival_from_treatment_start: Option<SurvivalObservation>,
    /// Progression-free survival counted from systemic treatment start
    pub progression_free_survival: Option<SurvivalObservation>,
}

impl ReferenceEntry {
    /// Whether the tumor was metastatic at primary diagnosis
    #[must_use]
    pub const fn is_synchronous(&self) -> bool {
        !self.tumor.metastatic_diagnosis.is_metachronous
    }

    /// Days between metastatic diagnosis and systemic treatment start
    #[must_use]
    pub fn days_from_metastatic_diagnosis_to_treatment(&self) -> Option<i32> {
        self.days_to_systemic_treatment_start
            .map(|start| start - self.days_to_metastatic_diagnosis)
    }
}
