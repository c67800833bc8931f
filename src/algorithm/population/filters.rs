//! Population filtering criteria
//!
//! This module provides filters for narrowing a cohort of reference entries
//! down to a clinical sub-population. Filters on an axis whose value is
//! unknown for an entry never match that entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Gene, LocationGroup, ReferenceEntry, Sex, TreatmentGroup};

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to a reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopulationFilter {
    /// Filter by age at primary diagnosis
    AgeRange {
        /// Minimum age (inclusive)
        min_age: Option<u32>,
        /// Maximum age (inclusive)
        max_age: Option<u32>,
    },
    /// Filter by sex
    Sex(Sex),
    /// Filter by mutation status of a gene
    Mutation {
        gene: Gene,
        /// Whether the gene must be mutated (`true`) or wild-type (`false`)
        mutated: bool,
    },
    /// Filter by microsatellite instability
    Microsatellite {
        /// Whether the tumor must be MSI (`true`) or MSS (`false`)
        unstable: bool,
    },
    /// Exact set of metastasis location groups
    MetastasisLocationGroups(BTreeSet<LocationGroup>),
    /// Filter by calendar year of primary diagnosis
    DiagnosisYear {
        /// First year (inclusive)
        from: Option<i32>,
        /// Last year (inclusive)
        to: Option<i32>,
    },
    /// WHO performance status at metastatic diagnosis at most the given value
    WhoStatusAtMost(i32),
    /// Charlson comorbidity index at metastatic diagnosis at most the given value
    CharlsonIndexAtMost(u32),
    /// Filter by treatment group
    TreatmentGroup(TreatmentGroup),
    /// Combined filter that requires all criteria to be met
    All(Vec<PopulationFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<PopulationFilter>),
    /// Inverts a filter
    Not(Box<PopulationFilter>),
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

impl FilterCriteria<ReferenceEntry> for PopulationFilter {
    fn meets_criteria(&self, entry: &ReferenceEntry) -> bool {
        let state = &entry.clinical_state;
        match self {
            Self::AgeRange { min_age, max_age } => {
                within(entry.age_at_diagnosis, *min_age, *max_age)
            }
            Self::Sex(sex) => entry.sex == *sex,
            Self::Mutation { gene, mutated } => state
                .molecular
                .and_then(|molecular| molecular.mutation_status(*gene))
                .is_some_and(|status| status == *mutated),
            Self::Microsatellite { unstable } => state
                .molecular
                .and_then(|molecular| molecular.has_msi)
                .is_some_and(|msi| msi == *unstable),
            Self::MetastasisLocationGroups(groups) => entry.metastasis_location_groups == *groups,
            Self::DiagnosisYear { from, to } => within(entry.diagnosis_year, *from, *to),
            Self::WhoStatusAtMost(max) => state.who_status.is_some_and(|who| who <= *max),
            Self::CharlsonIndexAtMost(max) => state
                .charlson_comorbidity_index()
                .is_some_and(|index| index <= *max),
            Self::TreatmentGroup(group) => entry.treatment_group == Some(*group),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(entry)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(entry)),
            Self::Not(filter) => !filter.meets_criteria(entry),
        }
    }
}

impl PopulationFilter {
    /// Filter that accepts every entry
    #[must_use]
    pub const fn everyone() -> Self {
        Self::All(Vec::new())
    }

    /// Filter on an exact set of location groups
    #[must_use]
    pub fn location_groups(groups: &[LocationGroup]) -> Self {
        Self::MetastasisLocationGroups(groups.iter().copied().collect())
    }

    /// Keep the entries meeting this filter
    #[must_use]
    pub fn filter_entries<'a>(&self, entries: &[&'a ReferenceEntry]) -> Vec<&'a ReferenceEntry> {
        entries
            .iter()
            .copied()
            .filter(|entry| self.meets_criteria(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MolecularResult;
    use crate::utils::test::fixtures::ReferenceEntryBuilder;

    #[test]
    fn test_age_range_is_inclusive() {
        let entry = ReferenceEntryBuilder::new(1).age(70).build();
        let filter = PopulationFilter::AgeRange {
            min_age: Some(70),
            max_age: None,
        };
        assert!(filter.meets_criteria(&entry));

        let filter = PopulationFilter::AgeRange {
            min_age: None,
            max_age: Some(69),
        };
        assert!(!filter.meets_criteria(&entry));
    }

    #[test]
    fn test_unknown_mutation_status_never_matches() {
        let untested = ReferenceEntryBuilder::new(1).build();
        let wild_type = PopulationFilter::Mutation {
            gene: Gene::Ras,
            mutated: false,
        };
        let mutated = PopulationFilter::Mutation {
            gene: Gene::Ras,
            mutated: true,
        };
        assert!(!wild_type.meets_criteria(&untested));
        assert!(!mutated.meets_criteria(&untested));

        let tested = ReferenceEntryBuilder::new(2)
            .molecular(MolecularResult {
                has_kras_mutation: Some(false),
                has_nras_mutation: Some(false),
                ..MolecularResult::default()
            })
            .build();
        assert!(wild_type.meets_criteria(&tested));
        assert!(!mutated.meets_criteria(&tested));
    }

    #[test]
    fn test_location_groups_match_exactly() {
        let liver_only = PopulationFilter::location_groups(&[LocationGroup::Liver]);
        let liver = ReferenceEntryBuilder::new(1)
            .location_groups(&[LocationGroup::Liver])
            .build();
        let liver_and_lung = ReferenceEntryBuilder::new(2)
            .location_groups(&[LocationGroup::Liver, LocationGroup::Lung])
            .build();

        assert!(liver_only.meets_criteria(&liver));
        assert!(!liver_only.meets_criteria(&liver_and_lung));
    }

    #[test]
    fn test_combinators() {
        let entry = ReferenceEntryBuilder::new(1)
            .age(55)
            .sex(Sex::Female)
            .build();

        assert!(PopulationFilter::everyone().meets_criteria(&entry));
        assert!(
            PopulationFilter::All(vec![
                PopulationFilter::Sex(Sex::Female),
                PopulationFilter::AgeRange {
                    min_age: Some(50),
                    max_age: Some(60)
                },
            ])
            .meets_criteria(&entry)
        );
        assert!(
            !PopulationFilter::Any(vec![
                PopulationFilter::Sex(Sex::Male),
                PopulationFilter::WhoStatusAtMost(1),
            ])
            .meets_criteria(&entry)
        );
        assert!(
            PopulationFilter::Not(Box::new(PopulationFilter::Sex(Sex::Male)))
                .meets_criteria(&entry)
        );
    }
}
