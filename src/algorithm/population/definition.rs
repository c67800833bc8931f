//! Named population definitions
//!
//! A population definition is a named filter. Definitions are evaluated
//! independently, so one entry can belong to several populations.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{OutcomeError, Result};
use crate::models::{Gene, LocationGroup, ReferenceEntry, Sex};

use super::filters::{FilterCriteria, PopulationFilter};

/// A named sub-population of the cohort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationDefinition {
    /// Name shown as column header
    pub name: String,
    /// Filter deciding membership
    pub filter: PopulationFilter,
}

impl PopulationDefinition {
    /// Create a new population definition
    #[must_use]
    pub fn new(name: impl Into<String>, filter: PopulationFilter) -> Self {
        Self {
            name: name.into(),
            filter,
        }
    }

    /// Whether an entry belongs to this population
    #[must_use]
    pub fn includes(&self, entry: &ReferenceEntry) -> bool {
        self.filter.meets_criteria(entry)
    }
}

/// The populations of the standard outcome report
#[must_use]
pub fn standard_population_definitions() -> Vec<PopulationDefinition> {
    vec![
        PopulationDefinition::new("All", PopulationFilter::everyone()),
        PopulationDefinition::new(
            "Age <70",
            PopulationFilter::AgeRange {
                min_age: None,
                max_age: Some(69),
            },
        ),
        PopulationDefinition::new(
            "Age >=70",
            PopulationFilter::AgeRange {
                min_age: Some(70),
                max_age: None,
            },
        ),
        PopulationDefinition::new("Male", PopulationFilter::Sex(Sex::Male)),
        PopulationDefinition::new("Female", PopulationFilter::Sex(Sex::Female)),
        PopulationDefinition::new("WHO 0-1", PopulationFilter::WhoStatusAtMost(1)),
        PopulationDefinition::new(
            "RAS wild-type",
            PopulationFilter::Mutation {
                gene: Gene::Ras,
                mutated: false,
            },
        ),
        PopulationDefinition::new(
            "BRAF mutated",
            PopulationFilter::Mutation {
                gene: Gene::Braf,
                mutated: true,
            },
        ),
        PopulationDefinition::new(
            "Liver only",
            PopulationFilter::location_groups(&[LocationGroup::Liver]),
        ),
    ]
}

/// Check that definitions can be reported side by side
///
/// Names are column headers, so they must be non-empty and unique.
pub fn validate_population_definitions(definitions: &[PopulationDefinition]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for definition in definitions {
        if definition.name.trim().is_empty() {
            return Err(OutcomeError::population_error("population name is empty"));
        }
        if !seen.insert(definition.name.as_str()) {
            return Err(OutcomeError::population_error(format!(
                "duplicate population name '{}'",
                definition.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_definitions_are_valid() {
        let definitions = standard_population_definitions();
        assert!(validate_population_definitions(&definitions).is_ok());
        assert_eq!(definitions[0].name, "All");
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let definitions = vec![
            PopulationDefinition::new("All", PopulationFilter::everyone()),
            PopulationDefinition::new("All", PopulationFilter::Sex(Sex::Male)),
        ];
        assert!(matches!(
            validate_population_definitions(&definitions),
            Err(OutcomeError::InvalidPopulation(_))
        ));

        let unnamed = vec![PopulationDefinition::new(" ", PopulationFilter::everyone())];
        assert!(validate_population_definitions(&unnamed).is_err());
    }

    #[test]
    fn test_definition_round_trips_through_json() {
        let json = r#"{ "name": "Liver only", "filter": { "MetastasisLocationGroups": ["Liver"] } }"#;
        let definition: PopulationDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(
            definition.filter,
            PopulationFilter::location_groups(&[LocationGroup::Liver])
        );
    }
}
