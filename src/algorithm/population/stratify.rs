//! Stratification of reference entries by treatment and population

use std::collections::BTreeMap;

use crate::models::{ReferenceEntry, TreatmentGroup};

use super::definition::PopulationDefinition;

/// Entries grouped by treatment group, in treatment group order
pub type EntriesByTreatment<'a> = BTreeMap<TreatmentGroup, Vec<&'a ReferenceEntry>>;

/// Treatment group of an entry, if it can be attributed to a classified regimen
#[must_use]
pub fn assignable_treatment_group(entry: &ReferenceEntry) -> Option<TreatmentGroup> {
    entry
        .treatment_group
        .filter(|group| *group != TreatmentGroup::Other)
}

/// Group entries by treatment
///
/// Entries whose treatment group is unknown or `Other` are dropped, since a
/// treatment decision cannot be attributed to an unclassified regimen.
pub fn stratify_by_treatment<'a, F>(
    entries: &'a [ReferenceEntry],
    treatment_group_of: F,
) -> EntriesByTreatment<'a>
where
    F: Fn(&ReferenceEntry) -> Option<TreatmentGroup>,
{
    let mut by_treatment = EntriesByTreatment::new();
    for entry in entries {
        match treatment_group_of(entry) {
            Some(TreatmentGroup::Other) | None => {}
            Some(group) => by_treatment.entry(group).or_default().push(entry),
        }
    }
    by_treatment
}

/// The entries of one population, grouped by treatment
#[derive(Debug, Clone)]
pub struct PopulationSubset<'a> {
    pub name: String,
    pub entries_by_treatment: EntriesByTreatment<'a>,
}

impl PopulationSubset<'_> {
    /// Number of entries across all treatment groups
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries_by_treatment.values().map(Vec::len).sum()
    }
}

/// Restrict the stratified entries to each population
///
/// Every definition is applied independently; treatment groups left without
/// entries are kept as empty lists so all subsets share the same keys.
#[must_use]
pub fn apply_population_definitions<'a>(
    entries_by_treatment: &EntriesByTreatment<'a>,
    definitions: &[PopulationDefinition],
) -> Vec<PopulationSubset<'a>> {
    definitions
        .iter()
        .map(|definition| PopulationSubset {
            name: definition.name.clone(),
            entries_by_treatment: entries_by_treatment
                .iter()
                .map(|(group, entries)| (*group, definition.filter.filter_entries(entries)))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::population::PopulationFilter;
    use crate::models::Sex;
    use crate::utils::test::fixtures::ReferenceEntryBuilder;

    fn treated(patient_id: u64, group: TreatmentGroup, sex: Sex) -> ReferenceEntry {
        ReferenceEntryBuilder::new(patient_id)
            .treatment(group)
            .sex(sex)
            .build()
    }

    #[test]
    fn test_unclassified_entries_are_dropped() {
        let entries = vec![
            treated(1, TreatmentGroup::Capox, Sex::Male),
            treated(2, TreatmentGroup::Other, Sex::Male),
            ReferenceEntryBuilder::new(3).build(),
            treated(4, TreatmentGroup::Capox, Sex::Female),
            treated(5, TreatmentGroup::Folfiri, Sex::Male),
        ];

        let by_treatment = stratify_by_treatment(&entries, assignable_treatment_group);
        assert_eq!(by_treatment.len(), 2);
        assert_eq!(by_treatment[&TreatmentGroup::Capox].len(), 2);
        assert_eq!(by_treatment[&TreatmentGroup::Folfiri].len(), 1);
        assert!(!by_treatment.contains_key(&TreatmentGroup::Other));
    }

    #[test]
    fn test_populations_overlap() {
        let entries = vec![
            treated(1, TreatmentGroup::Capox, Sex::Male),
            treated(2, TreatmentGroup::Capox, Sex::Female),
        ];
        let by_treatment = stratify_by_treatment(&entries, assignable_treatment_group);
        let definitions = vec![
            PopulationDefinition::new("All", PopulationFilter::everyone()),
            PopulationDefinition::new("Male", PopulationFilter::Sex(Sex::Male)),
        ];

        let subsets = apply_population_definitions(&by_treatment, &definitions);
        assert_eq!(subsets[0].size(), 2);
        assert_eq!(subsets[1].size(), 1);
        let male_capox = &subsets[1].entries_by_treatment[&TreatmentGroup::Capox];
        assert_eq!(male_capox[0].patient_id, 1);
    }
}
