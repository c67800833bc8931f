//! Cohort assembly and population definitions
//!
//! This module turns patient records into reference entries, groups them by
//! treatment and narrows them down to named clinical sub-populations.

pub mod builder;
pub mod definition;
pub mod filters;
pub mod stratify;

// Re-export commonly used items
pub use builder::{
    EntryRejection, build_reference_entries, build_reference_entry,
    first_metastatic_systemic_treatment, metastatic_treatment_group,
};
pub use definition::{
    PopulationDefinition, standard_population_definitions, validate_population_definitions,
};
pub use filters::{FilterCriteria, PopulationFilter};
pub use stratify::{
    EntriesByTreatment, PopulationSubset, apply_population_definitions, assignable_treatment_group,
    stratify_by_treatment,
};
