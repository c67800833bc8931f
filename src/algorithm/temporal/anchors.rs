//! Anchor-day derivation from treatment and metastasis timelines
//!
//! Anchor days are the cutoffs for as-of queries and the origins of the
//! survival durations. A `None` anchor means the tumor cannot be placed on
//! the timeline and is left out of anything that depends on that anchor.

use crate::models::{
    MetastaticDiagnosis, MetastaticPresence, ProgressionMeasure, ProgressionMeasureType,
    SurvivalObservation, TreatmentEpisode, Tumor,
};

/// Days between primary diagnosis and metastatic diagnosis
///
/// Synchronous tumors were metastatic at primary diagnosis and always yield
/// `Some(0)`. Metachronous tumors yield the earliest dated metastasis, or
/// `None` if no metastasis is dated.
#[must_use]
pub fn days_between_primary_and_metastatic_diagnosis(
    metastatic_diagnosis: &MetastaticDiagnosis,
) -> Option<i32> {
    if !metastatic_diagnosis.is_metachronous {
        return Some(0);
    }

    metastatic_diagnosis
        .metastases
        .iter()
        .filter_map(|metastasis| metastasis.days_since_diagnosis)
        .min()
}

/// The treatment episode that started with metastatic disease present
#[must_use]
pub fn metastatic_treatment_episode(tumor: &Tumor) -> Option<&TreatmentEpisode> {
    tumor
        .treatment_episodes
        .iter()
        .find(|episode| episode.metastatic_presence == MetastaticPresence::AtStart)
}

/// Days between primary diagnosis and the first metastatic systemic treatment
///
/// `None` when the tumor has no metastatic treatment episode, or when none of
/// its systemic treatments has a known start day.
#[must_use]
pub fn days_between_diagnosis_and_systemic_treatment_start(tumor: &Tumor) -> Option<i32> {
    metastatic_treatment_episode(tumor)?
        .systemic_treatments
        .iter()
        .filter_map(|treatment| treatment.days_between_diagnosis_and_start)
        .min()
}

/// Earliest dated measure of the given types strictly after `start_day`
fn first_measure_after<'a>(
    episode: &'a TreatmentEpisode,
    start_day: i32,
    accept: impl Fn(ProgressionMeasureType) -> bool,
) -> Option<&'a ProgressionMeasure> {
    episode
        .progression_measures
        .iter()
        .filter(|measure| accept(measure.measure_type))
        .filter_map(|measure| {
            measure
                .days_since_diagnosis
                .filter(|day| *day > start_day)
                .map(|day| (day, measure))
        })
        .min_by_key(|(day, _)| *day)
        .map(|(_, measure)| measure)
}

/// First progression after the treatment started
///
/// Progressions on or before the start day, and progressions without a day,
/// cannot be attributed to the treatment and are skipped.
#[must_use]
pub fn first_progression_after_treatment_start(
    episode: &TreatmentEpisode,
    start_day: i32,
) -> Option<&ProgressionMeasure> {
    first_measure_after(episode, start_day, |measure_type| {
        measure_type == ProgressionMeasureType::Progression
    })
}

/// First progression or censoring after the treatment started
///
/// This is the earliest day at which the patient stopped being known to be
/// progression-free.
#[must_use]
pub fn first_event_after_treatment_start(
    episode: &TreatmentEpisode,
    start_day: i32,
) -> Option<&ProgressionMeasure> {
    first_measure_after(episode, start_day, |measure_type| {
        matches!(
            measure_type,
            ProgressionMeasureType::Progression | ProgressionMeasureType::Censor
        )
    })
}

/// Progression-free survival counted from `treatment_start`
///
/// The event is the first progression or censoring after the start; it
/// counts as an observed event only if it is a progression.
#[must_use]
pub fn progression_free_survival(
    tumor: &Tumor,
    treatment_start: i32,
) -> Option<SurvivalObservation> {
    let episode = metastatic_treatment_episode(tumor)?;
    let measure = first_event_after_treatment_start(episode, treatment_start)?;
    let day = measure.days_since_diagnosis?;

    Some(SurvivalObservation::new(
        day - treatment_start,
        measure.measure_type == ProgressionMeasureType::Progression,
    ))
}

fn overall_survival_from(tumor: &Tumor, origin_day: i32) -> Option<SurvivalObservation> {
    let survival = tumor.survival?;
    let duration = survival.days_since_diagnosis - origin_day;
    (duration >= 0).then(|| SurvivalObservation::new(duration, !survival.is_alive))
}

/// Overall survival counted from metastatic diagnosis
///
/// `None` without a vital status, or when the vital status predates the anchor.
#[must_use]
pub fn overall_survival_from_metastatic_diagnosis(
    tumor: &Tumor,
    metastatic_anchor: i32,
) -> Option<SurvivalObservation> {
    overall_survival_from(tumor, metastatic_anchor)
}

/// Overall survival counted from systemic treatment start
#[must_use]
pub fn overall_survival_from_treatment_start(
    tumor: &Tumor,
    treatment_start: i32,
) -> Option<SurvivalObservation> {
    overall_survival_from(tumor, treatment_start)
}
