//! Test fixtures
//!
//! Builders for tumors, patients and reference entries, and a seeded
//! synthetic cohort generator.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

use crate::models::{
    ClinicalState, Drug, LocationGroup, Metastasis, MetastasisLocation, MetastaticPresence,
    MolecularResult, PatientRecord, ProgressionMeasure, ProgressionMeasureType, ReferenceEntry, Sex,
    SurvivalMeasurement, SurvivalObservation, SystemicTreatment, TimedObservation, TreatmentEpisode,
    TreatmentGroup, Tumor,
};

/// Incidence date used by fixture tumors
#[must_use]
pub fn fixture_incidence_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 3, 1).unwrap_or_default()
}

/// A metastatic treatment episode
#[must_use]
pub fn metastatic_episode(
    systemic_treatments: Vec<SystemicTreatment>,
    progression_measures: Vec<ProgressionMeasure>,
) -> TreatmentEpisode {
    TreatmentEpisode {
        metastatic_presence: MetastaticPresence::AtStart,
        systemic_treatments,
        progression_measures,
    }
}

/// A patient record
#[must_use]
pub fn patient(
    patient_id: u64,
    sex: Sex,
    age_at_diagnosis: u32,
    tumors: Vec<Tumor>,
) -> PatientRecord {
    PatientRecord {
        patient_id,
        sex,
        age_at_diagnosis,
        tumors,
    }
}

/// Builder for tumors with a metastatic treatment episode
#[derive(Debug, Clone)]
pub struct TumorBuilder {
    tumor: Tumor,
}

impl TumorBuilder {
    /// Tumor that was metastatic at primary diagnosis
    #[must_use]
    pub fn synchronous(id: u64) -> Self {
        Self {
            tumor: Tumor::new(id, fixture_incidence_date()),
        }
    }

    /// Tumor that became metastatic after primary diagnosis
    #[must_use]
    pub fn metachronous(id: u64) -> Self {
        let mut builder = Self::synchronous(id);
        builder.tumor.metastatic_diagnosis.is_metachronous = true;
        builder
    }

    #[must_use]
    pub fn metastasis(
        mut self,
        days_since_diagnosis: Option<i32>,
        location: MetastasisLocation,
    ) -> Self {
        self.tumor.metastatic_diagnosis.metastases.push(Metastasis {
            days_since_diagnosis,
            location,
            is_linked_to_progression: None,
        });
        self
    }

    #[must_use]
    pub fn who(mut self, days_since_diagnosis: i32, status: i32) -> Self {
        self.tumor
            .who_assessments
            .push(TimedObservation::new(days_since_diagnosis, status));
        self
    }

    #[must_use]
    pub fn molecular(mut self, days_since_diagnosis: i32, result: MolecularResult) -> Self {
        self.tumor
            .molecular_results
            .push(TimedObservation::new(days_since_diagnosis, result));
        self
    }

    /// Add a systemic treatment to the metastatic episode
    #[must_use]
    pub fn systemic_treatment(mut self, start: Option<i32>, drugs: Vec<Drug>) -> Self {
        self.episode()
            .systemic_treatments
            .push(SystemicTreatment::new(start, drugs));
        self
    }

    /// Add a progression measure to the metastatic episode
    #[must_use]
    pub fn progression(mut self, measure: ProgressionMeasure) -> Self {
        self.episode().progression_measures.push(measure);
        self
    }

    #[must_use]
    pub const fn survival(mut self, survival: SurvivalMeasurement) -> Self {
        self.tumor.survival = Some(survival);
        self
    }

    #[must_use]
    pub fn build(self) -> Tumor {
        self.tumor
    }

    fn episode(&mut self) -> &mut TreatmentEpisode {
        let episodes = &mut self.tumor.treatment_episodes;
        let index = match episodes
            .iter()
            .position(|episode| episode.metastatic_presence == MetastaticPresence::AtStart)
        {
            Some(index) => index,
            None => {
                episodes.push(metastatic_episode(Vec::new(), Vec::new()));
                episodes.len() - 1
            }
        };
        &mut episodes[index]
    }
}

/// Builder for reference entries with hand-picked derived values
#[derive(Debug, Clone)]
pub struct ReferenceEntryBuilder {
    entry: ReferenceEntry,
}

impl ReferenceEntryBuilder {
    /// Synchronous entry of a 65 year old man without any derived outcome
    #[must_use]
    pub fn new(patient_id: u64) -> Self {
        let tumor = TumorBuilder::synchronous(patient_id)
            .metastasis(Some(0), MetastasisLocation::Liver)
            .build();
        Self {
            entry: ReferenceEntry {
                patient_id,
                sex: Sex::Male,
                age_at_diagnosis: 65,
                diagnosis_year: 2015,
                tumor,
                days_to_metastatic_diagnosis: 0,
                days_to_systemic_treatment_start: None,
                treatment_group: None,
                clinical_state: ClinicalState::default(),
                metastasis_location_groups: BTreeSet::new(),
                overall_survival: None,
                overall_survival_from_treatment_start: None,
                progression_free_survival: None,
            },
        }
    }

    #[must_use]
    pub const fn age(mut self, age_at_diagnosis: u32) -> Self {
        self.entry.age_at_diagnosis = age_at_diagnosis;
        self
    }

    #[must_use]
    pub const fn sex(mut self, sex: Sex) -> Self {
        self.entry.sex = sex;
        self
    }

    #[must_use]
    pub const fn who(mut self, status: i32) -> Self {
        self.entry.clinical_state.who_status = Some(status);
        self
    }

    #[must_use]
    pub const fn molecular(mut self, result: MolecularResult) -> Self {
        self.entry.clinical_state.molecular = Some(result);
        self
    }

    #[must_use]
    pub fn location_groups(mut self, groups: &[LocationGroup]) -> Self {
        self.entry.metastasis_location_groups = groups.iter().copied().collect();
        self
    }

    /// Systemic treatment start, in days since primary diagnosis
    #[must_use]
    pub const fn treatment_start(mut self, days: i32) -> Self {
        self.entry.days_to_systemic_treatment_start = Some(days);
        self
    }

    #[must_use]
    pub const fn treatment(mut self, group: TreatmentGroup) -> Self {
        self.entry.treatment_group = Some(group);
        self
    }

    #[must_use]
    pub const fn overall_survival(mut self, observation: SurvivalObservation) -> Self {
        self.entry.overall_survival = Some(observation);
        self
    }

    #[must_use]
    pub const fn progression_free(mut self, observation: SurvivalObservation) -> Self {
        self.entry.progression_free_survival = Some(observation);
        self
    }

    #[must_use]
    pub fn build(self) -> ReferenceEntry {
        self.entry
    }
}

const REGIMENS: &[&[Drug]] = &[
    &[Drug::Capecitabine, Drug::Oxaliplatin],
    &[Drug::Capecitabine, Drug::Oxaliplatin, Drug::Bevacizumab],
    &[Drug::Fluorouracil, Drug::Oxaliplatin],
    &[Drug::Fluorouracil, Drug::Irinotecan],
    &[Drug::Fluorouracil, Drug::Irinotecan, Drug::Panitumumab],
    &[Drug::Capecitabine],
    &[Drug::Pembrolizumab],
    &[Drug::Other],
];

const LOCATIONS: &[MetastasisLocation] = &[
    MetastasisLocation::Liver,
    MetastasisLocation::Liver,
    MetastasisLocation::Lung,
    MetastasisLocation::Peritoneum,
    MetastasisLocation::LymphNode,
    MetastasisLocation::Bone,
];

/// Generate a reproducible synthetic cohort
///
/// Every patient has one tumor. Most tumors are metastatic and most
/// metastatic tumors are treated; progression, vital status and clinical
/// assessments are drawn around the anchors.
#[must_use]
pub fn random_cohort(seed: u64, num_patients: usize) -> Vec<PatientRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_patients as u64)
        .map(|patient_id| {
            let sex = if rng.random_bool(0.5) {
                Sex::Male
            } else {
                Sex::Female
            };
            let age = rng.random_range(35..92);
            let tumor = random_tumor(&mut rng, patient_id);
            patient(patient_id, sex, age, vec![tumor])
        })
        .collect()
}

fn random_tumor(rng: &mut StdRng, id: u64) -> Tumor {
    let metachronous = rng.random_bool(0.4);
    let mut builder = if metachronous {
        TumorBuilder::metachronous(id)
    } else {
        TumorBuilder::synchronous(id)
    };
    if rng.random_bool(0.05) {
        return builder.build();
    }

    let anchor = if metachronous {
        rng.random_range(90..1500)
    } else {
        0
    };
    for _ in 0..rng.random_range(1..4) {
        let location = LOCATIONS[rng.random_range(0..LOCATIONS.len())];
        let day = anchor + rng.random_range(0..60);
        builder = builder.metastasis(Some(day), location);
    }
    builder = builder
        .who(anchor - rng.random_range(0..30), rng.random_range(0..4))
        .molecular(
            anchor + rng.random_range(0..20),
            MolecularResult {
                has_kras_mutation: Some(rng.random_bool(0.4)),
                has_nras_mutation: Some(rng.random_bool(0.05)),
                has_braf_mutation: Some(rng.random_bool(0.1)),
                has_braf_v600e_mutation: None,
                has_msi: Some(rng.random_bool(0.05)),
            },
        );

    let last_contact = anchor + rng.random_range(30..2400);
    if rng.random_bool(0.8) {
        let start = anchor + rng.random_range(7..90);
        let drugs = REGIMENS[rng.random_range(0..REGIMENS.len())].to_vec();
        builder = builder.systemic_treatment(Some(start), drugs);
        if start < last_contact {
            let measure_type = if rng.random_bool(0.7) {
                ProgressionMeasureType::Progression
            } else {
                ProgressionMeasureType::Censor
            };
            let day = rng.random_range(start + 1..=last_contact);
            builder = builder.progression(ProgressionMeasure::new(day, measure_type));
        }
    }

    builder
        .survival(SurvivalMeasurement {
            days_since_diagnosis: last_contact,
            is_alive: rng.random_bool(0.3),
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_cohort_is_reproducible() {
        assert_eq!(random_cohort(7, 25), random_cohort(7, 25));
        assert_eq!(random_cohort(7, 25).len(), 25);
    }

    #[test]
    fn test_builder_collects_one_metastatic_episode() {
        let tumor = TumorBuilder::metachronous(1)
            .systemic_treatment(Some(10), vec![Drug::Capecitabine])
            .progression(ProgressionMeasure::new(40, ProgressionMeasureType::Progression))
            .build();
        assert!(tumor.metastatic_diagnosis.is_metachronous);
        assert_eq!(tumor.treatment_episodes.len(), 1);
        assert_eq!(tumor.treatment_episodes[0].progression_measures.len(), 1);
    }
}
