//! Systemic treatment models and treatment group classification
//!
//! Regimens are classified into coarse treatment groups by exact match of
//! their drug components against an explicit table. Callers pass the table
//! they want to use; `TREATMENT_GROUP_TABLE` is the standard one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Registered drug of a systemic treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Drug {
    Capecitabine,
    Fluorouracil,
    Oxaliplatin,
    Irinotecan,
    Bevacizumab,
    Cetuximab,
    Panitumumab,
    TrifluridineTipiracil,
    Pembrolizumab,
    Nivolumab,
    Other,
}

impl Drug {
    /// Component used for regimen classification
    #[must_use]
    pub const fn component(self) -> RegimenComponent {
        match self {
            Self::Capecitabine => RegimenComponent::Capecitabine,
            Self::Fluorouracil => RegimenComponent::Fluorouracil,
            Self::Oxaliplatin => RegimenComponent::Oxaliplatin,
            Self::Irinotecan => RegimenComponent::Irinotecan,
            Self::Bevacizumab => RegimenComponent::Bevacizumab,
            Self::Cetuximab | Self::Panitumumab => RegimenComponent::AntiEgfr,
            Self::TrifluridineTipiracil => RegimenComponent::TrifluridineTipiracil,
            Self::Pembrolizumab | Self::Nivolumab => RegimenComponent::Immunotherapy,
            Self::Other => RegimenComponent::Other,
        }
    }
}

/// Clinically equivalent drug class within a regimen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegimenComponent {
    Capecitabine,
    Fluorouracil,
    Oxaliplatin,
    Irinotecan,
    Bevacizumab,
    AntiEgfr,
    TrifluridineTipiracil,
    Immunotherapy,
    Other,
}

/// A systemic treatment given within a treatment episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemicTreatment {
    /// Days between primary diagnosis and the first administration
    pub days_between_diagnosis_and_start: Option<i32>,
    /// Days between primary diagnosis and the last administration
    #[serde(default)]
    pub days_between_diagnosis_and_stop: Option<i32>,
    pub drugs: Vec<Drug>,
}

impl SystemicTreatment {
    /// Create a systemic treatment starting on the given day
    #[must_use]
    pub fn new(days_between_diagnosis_and_start: Option<i32>, drugs: Vec<Drug>) -> Self {
        Self {
            days_between_diagnosis_and_start,
            days_between_diagnosis_and_stop: None,
            drugs,
        }
    }
}

/// Coarse bucket of clinically equivalent regimens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TreatmentGroup {
    Capox,
    CapoxB,
    Folfox,
    FolfoxB,
    FolfoxEgfr,
    Folfiri,
    FolfiriB,
    FolfiriEgfr,
    Folfoxiri,
    FolfoxiriB,
    FluoropyrimidineMono,
    FluoropyrimidineB,
    AntiEgfrMono,
    TrifluridineTipiracil,
    Immunotherapy,
    /// Any regimen not in the classification table
    Other,
}

impl TreatmentGroup {
    /// Display label used in report rows
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Capox => "CAPOX",
            Self::CapoxB => "CAPOX-B",
            Self::Folfox => "FOLFOX",
            Self::FolfoxB => "FOLFOX-B",
            Self::FolfoxEgfr => "FOLFOX-EGFRi",
            Self::Folfiri => "FOLFIRI",
            Self::FolfiriB => "FOLFIRI-B",
            Self::FolfiriEgfr => "FOLFIRI-EGFRi",
            Self::Folfoxiri => "FOLFOXIRI",
            Self::FolfoxiriB => "FOLFOXIRI-B",
            Self::FluoropyrimidineMono => "5-FU/CAP",
            Self::FluoropyrimidineB => "5-FU/CAP-B",
            Self::AntiEgfrMono => "EGFRi",
            Self::TrifluridineTipiracil => "Trifluridine/tipiracil",
            Self::Immunotherapy => "Immunotherapy",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for TreatmentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Regimen classification rule: an exact component set and its group
pub type RegimenRule = (TreatmentGroup, &'static [RegimenComponent]);

use RegimenComponent as C;

/// Standard regimen classification table
pub const TREATMENT_GROUP_TABLE: &[RegimenRule] = &[
    (TreatmentGroup::Capox, &[C::Capecitabine, C::Oxaliplatin]),
    (TreatmentGroup::CapoxB, &[C::Capecitabine, C::Oxaliplatin, C::Bevacizumab]),
    (TreatmentGroup::Folfox, &[C::Fluorouracil, C::Oxaliplatin]),
    (TreatmentGroup::FolfoxB, &[C::Fluorouracil, C::Oxaliplatin, C::Bevacizumab]),
    (TreatmentGroup::FolfoxEgfr, &[C::Fluorouracil, C::Oxaliplatin, C::AntiEgfr]),
    (TreatmentGroup::Folfiri, &[C::Fluorouracil, C::Irinotecan]),
    (TreatmentGroup::FolfiriB, &[C::Fluorouracil, C::Irinotecan, C::Bevacizumab]),
    (TreatmentGroup::FolfiriEgfr, &[C::Fluorouracil, C::Irinotecan, C::AntiEgfr]),
    (TreatmentGroup::Folfoxiri, &[C::Fluorouracil, C::Oxaliplatin, C::Irinotecan]),
    (
        TreatmentGroup::FolfoxiriB,
        &[C::Fluorouracil, C::Oxaliplatin, C::Irinotecan, C::Bevacizumab],
    ),
    (TreatmentGroup::FluoropyrimidineMono, &[C::Capecitabine]),
    (TreatmentGroup::FluoropyrimidineMono, &[C::Fluorouracil]),
    (TreatmentGroup::FluoropyrimidineB, &[C::Capecitabine, C::Bevacizumab]),
    (TreatmentGroup::FluoropyrimidineB, &[C::Fluorouracil, C::Bevacizumab]),
    (TreatmentGroup::AntiEgfrMono, &[C::AntiEgfr]),
    (TreatmentGroup::TrifluridineTipiracil, &[C::TrifluridineTipiracil]),
    (TreatmentGroup::TrifluridineTipiracil, &[C::TrifluridineTipiracil, C::Bevacizumab]),
    (TreatmentGroup::Immunotherapy, &[C::Immunotherapy]),
];

/// Classify a set of drugs using the given table
///
/// Returns `TreatmentGroup::Other` when no rule matches the component set
/// exactly, or when the drug list is empty.
#[must_use]
pub fn classify_drugs(drugs: &[Drug], table: &[RegimenRule]) -> TreatmentGroup {
    let components: BTreeSet<RegimenComponent> = drugs.iter().map(|d| d.component()).collect();
    if components.is_empty() {
        return TreatmentGroup::Other;
    }

    table
        .iter()
        .find(|(_, rule)| {
            rule.len() == components.len() && rule.iter().all(|c| components.contains(c))
        })
        .map_or(TreatmentGroup::Other, |(group, _)| *group)
}
