//! Tumor timeline models
//!
//! A `Tumor` holds every normalized timeline registered for one primary
//! diagnosis. All day offsets are relative to the primary diagnosis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::clinical::{AsaClass, Comorbidities, LabValue, MolecularResult, Sex};
use super::observation::TimedObservation;
use super::treatment::SystemicTreatment;

/// Anatomical location of a metastasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetastasisLocation {
    Liver,
    Lung,
    Peritoneum,
    LymphNode,
    Bone,
    Brain,
    Adrenal,
    Ovary,
    Skin,
    Other,
}

impl MetastasisLocation {
    /// Top-level group used for population stratification
    #[must_use]
    pub const fn group(self) -> LocationGroup {
        match self {
            Self::Liver => LocationGroup::Liver,
            Self::Lung => LocationGroup::Lung,
            Self::Peritoneum => LocationGroup::Peritoneum,
            Self::LymphNode => LocationGroup::LymphNode,
            Self::Bone
            | Self::Brain
            | Self::Adrenal
            | Self::Ovary
            | Self::Skin
            | Self::Other => LocationGroup::Other,
        }
    }
}

/// Top-level metastasis location group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationGroup {
    Liver,
    Lung,
    Peritoneum,
    LymphNode,
    Other,
}

impl fmt::Display for LocationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Liver => "Liver",
            Self::Lung => "Lung",
            Self::Peritoneum => "Peritoneum",
            Self::LymphNode => "Lymph node",
            Self::Other => "Other",
        };
        write!(f, "{label}")
    }
}

/// A single registered metastasis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metastasis {
    /// Days between primary diagnosis and detection, if known
    pub days_since_diagnosis: Option<i32>,
    pub location: MetastasisLocation,
    /// Whether the metastasis was registered as a sign of progression
    pub is_linked_to_progression: Option<bool>,
}

/// Metastatic state of a tumor
///
/// A synchronous tumor (`is_metachronous == false`) was metastatic at primary
/// diagnosis; the dated metastases then only describe locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetastaticDiagnosis {
    pub is_metachronous: bool,
    #[serde(default)]
    pub metastases: Vec<Metastasis>,
}

/// Metastatic status at the start of a treatment episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetastaticPresence {
    /// No metastases when the episode started
    Absent,
    /// Metastatic disease when the episode started
    AtStart,
    /// Metastases appeared during the episode
    AtProgression,
}

/// Kind of a progression measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressionMeasureType {
    /// Observed disease progression
    Progression,
    /// End of progression follow-up without progression
    Censor,
    /// Registered treatment response
    Response,
}

/// A progression-related assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionMeasure {
    pub days_since_diagnosis: Option<i32>,
    pub measure_type: ProgressionMeasureType,
}

impl ProgressionMeasure {
    /// Create a dated progression measure
    #[must_use]
    pub const fn new(days_since_diagnosis: i32, measure_type: ProgressionMeasureType) -> Self {
        Self {
            days_since_diagnosis: Some(days_since_diagnosis),
            measure_type,
        }
    }
}

/// One treatment course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentEpisode {
    pub metastatic_presence: MetastaticPresence,
    #[serde(default)]
    pub systemic_treatments: Vec<SystemicTreatment>,
    #[serde(default)]
    pub progression_measures: Vec<ProgressionMeasure>,
}

/// Latest known vital status of the patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivalMeasurement {
    pub days_since_diagnosis: i32,
    pub is_alive: bool,
}

/// All normalized timelines of one primary tumor diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tumor {
    /// Registry identifier of the tumor
    pub id: u64,
    /// Date of the primary diagnosis
    pub incidence_date: NaiveDate,
    #[serde(default)]
    pub metastatic_diagnosis: MetastaticDiagnosis,
    #[serde(default)]
    pub treatment_episodes: Vec<TreatmentEpisode>,
    #[serde(default)]
    pub who_assessments: Vec<TimedObservation<i32>>,
    #[serde(default)]
    pub asa_assessments: Vec<TimedObservation<AsaClass>>,
    #[serde(default)]
    pub comorbidity_assessments: Vec<TimedObservation<Comorbidities>>,
    #[serde(default)]
    pub molecular_results: Vec<TimedObservation<MolecularResult>>,
    #[serde(default)]
    pub lab_values: Vec<TimedObservation<LabValue>>,
    /// Latest known vital status
    pub survival: Option<SurvivalMeasurement>,
}

impl Tumor {
    /// Create a tumor without any registered timeline
    #[must_use]
    pub const fn new(id: u64, incidence_date: NaiveDate) -> Self {
        Self {
            id,
            incidence_date,
            metastatic_diagnosis: MetastaticDiagnosis {
                is_metachronous: false,
                metastases: Vec::new(),
            },
            treatment_episodes: Vec::new(),
            who_assessments: Vec::new(),
            asa_assessments: Vec::new(),
            comorbidity_assessments: Vec::new(),
            molecular_results: Vec::new(),
            lab_values: Vec::new(),
            survival: None,
        }
    }
}

/// A patient with its registered tumors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: u64,
    pub sex: Sex,
    /// Age in years at the first primary diagnosis
    pub age_at_diagnosis: u32,
    pub tumors: Vec<Tumor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_groups() {
        assert_eq!(MetastasisLocation::Liver.group(), LocationGroup::Liver);
        assert_eq!(MetastasisLocation::Brain.group(), LocationGroup::Other);
        assert_eq!(
            MetastasisLocation::LymphNode.group(),
            LocationGroup::LymphNode
        );
        assert_eq!(LocationGroup::LymphNode.to_string(), "Lymph node");
    }
}
