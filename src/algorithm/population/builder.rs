//! Reference entry assembly
//!
//! Turns patient records into one `ReferenceEntry` per metastatic tumor:
//! anchors are derived first, then every clinical axis is resolved at the
//! anchors and the survival durations are measured from them. Patients are
//! independent, so assembly runs in parallel.

use chrono::Datelike;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::Instant;

use crate::algorithm::temporal::{
    clinical_state_at, days_between_diagnosis_and_systemic_treatment_start,
    days_between_primary_and_metastatic_diagnosis, metastatic_treatment_episode,
    overall_survival_from_metastatic_diagnosis, overall_survival_from_treatment_start,
    progression_free_survival,
};
use crate::models::{
    LocationGroup, PatientRecord, ReferenceEntry, RegimenRule, SystemicTreatment, TreatmentGroup,
    Tumor, classify_drugs,
};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Why a tumor did not yield a reference entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRejection {
    /// No metastasis was ever registered
    NotMetastatic,
    /// Metachronous tumor without a dated metastasis
    UnresolvableMetastaticAnchor,
}

/// The first systemic treatment of the metastatic treatment episode
///
/// Treatments with a known start day come first; among undated treatments
/// the first listed is used.
#[must_use]
pub fn first_metastatic_systemic_treatment(tumor: &Tumor) -> Option<&SystemicTreatment> {
    metastatic_treatment_episode(tumor)?
        .systemic_treatments
        .iter()
        .min_by_key(|treatment| {
            treatment
                .days_between_diagnosis_and_start
                .unwrap_or(i32::MAX)
        })
}

/// Treatment group of the first metastatic systemic treatment
#[must_use]
pub fn metastatic_treatment_group(tumor: &Tumor, table: &[RegimenRule]) -> Option<TreatmentGroup> {
    first_metastatic_systemic_treatment(tumor)
        .map(|treatment| classify_drugs(&treatment.drugs, table))
}

/// Location groups of metastases known before treatment started
///
/// Undated metastases are always counted; without a treatment start every
/// metastasis is counted.
fn location_groups_before(tumor: &Tumor, treatment_start: Option<i32>) -> BTreeSet<LocationGroup> {
    tumor
        .metastatic_diagnosis
        .metastases
        .iter()
        .filter(|metastasis| match (metastasis.days_since_diagnosis, treatment_start) {
            (Some(day), Some(start)) => day <= start,
            _ => true,
        })
        .map(|metastasis| metastasis.location.group())
        .collect()
}

/// Assemble the reference entry of one tumor
pub fn build_reference_entry(
    patient: &PatientRecord,
    tumor: &Tumor,
    table: &[RegimenRule],
) -> Result<ReferenceEntry, EntryRejection> {
    if tumor.metastatic_diagnosis.metastases.is_empty() {
        return Err(EntryRejection::NotMetastatic);
    }
    let metastatic_anchor =
        days_between_primary_and_metastatic_diagnosis(&tumor.metastatic_diagnosis)
            .ok_or(EntryRejection::UnresolvableMetastaticAnchor)?;
    let treatment_start = days_between_diagnosis_and_systemic_treatment_start(tumor);

    Ok(ReferenceEntry {
        patient_id: patient.patient_id,
        sex: patient.sex,
        age_at_diagnosis: patient.age_at_diagnosis,
        diagnosis_year: tumor.incidence_date.year(),
        tumor: tumor.clone(),
        days_to_metastatic_diagnosis: metastatic_anchor,
        days_to_systemic_treatment_start: treatment_start,
        treatment_group: metastatic_treatment_group(tumor, table),
        clinical_state: clinical_state_at(tumor, metastatic_anchor, treatment_start),
        metastasis_location_groups: location_groups_before(tumor, treatment_start),
        overall_survival: overall_survival_from_metastatic_diagnosis(tumor, metastatic_anchor),
        overall_survival_from_treatment_start: treatment_start
            .and_then(|start| overall_survival_from_treatment_start(tumor, start)),
        progression_free_survival: treatment_start
            .and_then(|start| progression_free_survival(tumor, start)),
    })
}

/// Assemble reference entries for all metastatic tumors of all patients
///
/// Entries keep the order of the input. Tumors that cannot be anchored at a
/// metastatic diagnosis are skipped with a warning.
#[must_use]
pub fn build_reference_entries(
    patients: &[PatientRecord],
    table: &[RegimenRule],
) -> Vec<ReferenceEntry> {
    let start = Instant::now();
    log_operation_start(
        "Building reference entries for",
        &format!("{} patients", patients.len()),
    );

    let entries: Vec<ReferenceEntry> = patients
        .par_iter()
        .flat_map_iter(|patient| {
            patient
                .tumors
                .iter()
                .filter_map(move |tumor| entry_or_skip(patient, tumor, table))
        })
        .collect();

    log_operation_complete(
        "built",
        "reference entries",
        entries.len(),
        Some(start.elapsed()),
    );
    entries
}

fn entry_or_skip(
    patient: &PatientRecord,
    tumor: &Tumor,
    table: &[RegimenRule],
) -> Option<ReferenceEntry> {
    match build_reference_entry(patient, tumor, table) {
        Ok(entry) => Some(entry),
        Err(EntryRejection::NotMetastatic) => {
            log::debug!(
                "Tumor {} of patient {} is not metastatic, skipping",
                tumor.id,
                patient.patient_id
            );
            None
        }
        Err(EntryRejection::UnresolvableMetastaticAnchor) => {
            log_warning(
                &format!(
                    "Tumor {} of patient {} has no dated metastasis, skipping",
                    tumor.id, patient.patient_id
                ),
                None,
            );
            None
        }
    }
}
