//! Clinical value types observed along a tumor timeline
//!
//! Each type here is the value of one clinical axis: performance and fitness
//! classes, comorbidity snapshots, molecular panels and lab analytes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Registered sex of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// ASA physical status classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AsaClass {
    /// Healthy patient
    I = 1,
    /// Mild systemic disease
    II = 2,
    /// Severe systemic disease
    III = 3,
    /// Severe systemic disease that is a constant threat to life
    IV = 4,
    /// Moribund patient
    V = 5,
    /// Declared brain-dead patient
    VI = 6,
}

impl AsaClass {
    /// Convert a numeric ASA level (1-6) to `AsaClass`
    #[must_use]
    pub const fn from_level(level: i32) -> Option<Self> {
        match level {
            1 => Some(Self::I),
            2 => Some(Self::II),
            3 => Some(Self::III),
            4 => Some(Self::IV),
            5 => Some(Self::V),
            6 => Some(Self::VI),
            _ => None,
        }
    }

    /// Get the numeric level of this class
    #[must_use]
    pub const fn level(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for AsaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ASA {}", self.level())
    }
}

/// Charlson-style comorbidity flags registered at one assessment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comorbidities {
    pub myocardial_infarction: bool,
    pub congestive_heart_failure: bool,
    pub peripheral_vascular_disease: bool,
    pub cerebrovascular_disease: bool,
    pub dementia: bool,
    pub chronic_pulmonary_disease: bool,
    pub rheumatologic_disease: bool,
    pub peptic_ulcer_disease: bool,
    pub mild_liver_disease: bool,
    pub severe_liver_disease: bool,
    pub diabetes: bool,
    pub diabetes_with_end_organ_damage: bool,
    pub hemiplegia: bool,
    pub renal_disease: bool,
    pub other_malignancy: bool,
    pub hiv_aids: bool,
}

impl Comorbidities {
    /// Charlson comorbidity index of this snapshot
    ///
    /// The tumor under study is not counted. Severe variants of liver disease
    /// and diabetes replace the weight of their mild variants.
    #[must_use]
    pub fn charlson_comorbidity_index(&self) -> u32 {
        let weighted = [
            (self.myocardial_infarction, 1),
            (self.congestive_heart_failure, 1),
            (self.peripheral_vascular_disease, 1),
            (self.cerebrovascular_disease, 1),
            (self.dementia, 1),
            (self.chronic_pulmonary_disease, 1),
            (self.rheumatologic_disease, 1),
            (self.peptic_ulcer_disease, 1),
            (self.hemiplegia, 2),
            (self.renal_disease, 2),
            (self.other_malignancy, 2),
            (self.hiv_aids, 6),
        ];
        let base: u32 = weighted
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, weight)| weight)
            .sum();

        let liver = if self.severe_liver_disease {
            3
        } else if self.mild_liver_disease {
            1
        } else {
            0
        };
        let diabetes = if self.diabetes_with_end_organ_damage {
            2
        } else if self.diabetes {
            1
        } else {
            0
        };

        base + liver + diabetes
    }
}

/// Genes and markers that population filters can select on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gene {
    Kras,
    Nras,
    /// KRAS or NRAS
    Ras,
    Braf,
    BrafV600e,
}

/// Molecular test results known at one point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MolecularResult {
    pub has_kras_mutation: Option<bool>,
    pub has_nras_mutation: Option<bool>,
    pub has_braf_mutation: Option<bool>,
    pub has_braf_v600e_mutation: Option<bool>,
    pub has_msi: Option<bool>,
}

impl MolecularResult {
    /// Whether KRAS or NRAS is mutated
    ///
    /// Known when either gene is known to be mutated, or when both are known.
    #[must_use]
    pub fn has_ras_mutation(&self) -> Option<bool> {
        match (self.has_kras_mutation, self.has_nras_mutation) {
            (Some(true), _) | (_, Some(true)) => Some(true),
            (Some(false), Some(false)) => Some(false),
            _ => None,
        }
    }

    /// Mutation status for a gene, `None` if not tested
    #[must_use]
    pub fn mutation_status(&self, gene: Gene) -> Option<bool> {
        match gene {
            Gene::Kras => self.has_kras_mutation,
            Gene::Nras => self.has_nras_mutation,
            Gene::Ras => self.has_ras_mutation(),
            Gene::Braf => self.has_braf_mutation,
            Gene::BrafV600e => self.has_braf_v600e_mutation,
        }
    }
}

/// Lab analytes tracked along the tumor timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LabAnalyte {
    /// Lactate dehydrogenase (U/L)
    Ldh,
    /// Alkaline phosphatase (U/L)
    AlkalinePhosphatase,
    /// Absolute neutrophil count (10^9/L)
    Neutrophils,
    /// Serum albumin (g/L)
    Albumin,
    /// Leukocyte count (10^9/L)
    Leukocytes,
    /// Carcinoembryonic antigen (ug/L)
    Cea,
}

impl LabAnalyte {
    /// All analytes, in reporting order
    pub const ALL: [Self; 6] = [
        Self::Ldh,
        Self::AlkalinePhosphatase,
        Self::Neutrophils,
        Self::Albumin,
        Self::Leukocytes,
        Self::Cea,
    ];

    /// Short display name
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ldh => "LDH",
            Self::AlkalinePhosphatase => "ALP",
            Self::Neutrophils => "Neutrophils",
            Self::Albumin => "Albumin",
            Self::Leukocytes => "Leukocytes",
            Self::Cea => "CEA",
        }
    }
}

impl fmt::Display for LabAnalyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A single lab reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabValue {
    pub analyte: LabAnalyte,
    pub value: f64,
}
