//! Per-axis clinical interpreters
//!
//! Thin projections over [`resolve_as_of_by`]: each returns the axis value
//! most recently known on or before the given anchor day, or `None`.

use std::collections::BTreeMap;

use crate::models::{AsaClass, ClinicalState, Comorbidities, LabAnalyte, MolecularResult, Tumor};

use super::as_of::{resolve_as_of, resolve_as_of_by};

/// WHO performance status
#[must_use]
pub fn who_status_at(tumor: &Tumor, anchor_day: i32) -> Option<i32> {
    resolve_as_of(&tumor.who_assessments, anchor_day).copied()
}

/// ASA physical status class
#[must_use]
pub fn asa_class_at(tumor: &Tumor, anchor_day: i32) -> Option<AsaClass> {
    resolve_as_of(&tumor.asa_assessments, anchor_day).copied()
}

/// Comorbidity snapshot
#[must_use]
pub fn comorbidities_at(tumor: &Tumor, anchor_day: i32) -> Option<Comorbidities> {
    resolve_as_of(&tumor.comorbidity_assessments, anchor_day).copied()
}

/// Molecular test results
#[must_use]
pub fn molecular_result_at(tumor: &Tumor, anchor_day: i32) -> Option<MolecularResult> {
    resolve_as_of(&tumor.molecular_results, anchor_day).copied()
}

/// Value of one lab analyte
#[must_use]
pub fn lab_value_at(tumor: &Tumor, analyte: LabAnalyte, anchor_day: i32) -> Option<f64> {
    resolve_as_of_by(&tumor.lab_values, anchor_day, |lab| {
        (lab.analyte == analyte).then_some(lab.value)
    })
}

/// Clinical state of a tumor at its anchor days
///
/// Molecular results are resolved as of `treatment_anchor` when it is known,
/// and as of `metastatic_anchor` otherwise. All other axes are resolved as of
/// `metastatic_anchor`.
#[must_use]
pub fn clinical_state_at(
    tumor: &Tumor,
    metastatic_anchor: i32,
    treatment_anchor: Option<i32>,
) -> ClinicalState {
    let lab_values: BTreeMap<LabAnalyte, f64> = LabAnalyte::ALL
        .iter()
        .filter_map(|&analyte| {
            let value = lab_value_at(tumor, analyte, metastatic_anchor)?;
            Some((analyte, value))
        })
        .collect();

    ClinicalState {
        who_status: who_status_at(tumor, metastatic_anchor),
        asa_class: asa_class_at(tumor, metastatic_anchor),
        comorbidities: comorbidities_at(tumor, metastatic_anchor),
        molecular: molecular_result_at(tumor, treatment_anchor.unwrap_or(metastatic_anchor)),
        lab_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabValue, TimedObservation};
    use crate::utils::test::fixtures::TumorBuilder;

    fn lab(day: i32, analyte: LabAnalyte, value: f64) -> TimedObservation<LabValue> {
        TimedObservation::new(day, LabValue { analyte, value })
    }

    #[test]
    fn test_lab_value_is_resolved_per_analyte() {
        let mut tumor = TumorBuilder::synchronous(7).build();
        tumor.lab_values = vec![
            lab(-10, LabAnalyte::Ldh, 250.0),
            lab(-2, LabAnalyte::Cea, 12.5),
            lab(-5, LabAnalyte::Ldh, 310.0),
            lab(3, LabAnalyte::Ldh, 500.0),
        ];

        assert_eq!(lab_value_at(&tumor, LabAnalyte::Ldh, 0), Some(310.0));
        assert_eq!(lab_value_at(&tumor, LabAnalyte::Cea, 0), Some(12.5));
        assert_eq!(lab_value_at(&tumor, LabAnalyte::Albumin, 0), None);
        assert_eq!(lab_value_at(&tumor, LabAnalyte::Ldh, 10), Some(500.0));
    }

    #[test]
    fn test_clinical_state_uses_treatment_anchor_for_molecular() {
        let mut tumor = TumorBuilder::synchronous(3).who(-3, 1).who(20, 2).build();
        tumor.molecular_results = vec![TimedObservation::new(
            14,
            MolecularResult {
                has_braf_mutation: Some(true),
                ..MolecularResult::default()
            },
        )];

        let state = clinical_state_at(&tumor, 0, Some(30));
        assert_eq!(state.who_status, Some(1));
        let braf = state.molecular.and_then(|m| m.has_braf_mutation);
        assert_eq!(braf, Some(true));
        assert!(state.lab_values.is_empty());

        let state = clinical_state_at(&tumor, 0, None);
        assert_eq!(state.molecular, None);
    }
}
