//! Population breakdown of measurements
//!
//! The aggregator computes one `Measurement` per (treatment group,
//! population, measurement type) cell. Each cell only sees entries that are
//! in its treatment group, pass its population filter and are eligible for
//! its measurement type. Proportions use the population-level eligible count
//! (all treatment groups together) as denominator.

pub mod report;
pub mod request;

use serde::Serialize;
use std::time::Instant;

use crate::algorithm::measurement::{Measurement, MeasurementType};
use crate::algorithm::population::{
    EntriesByTreatment, PopulationDefinition, PopulationSubset, apply_population_definitions,
};
use crate::config::AnalysisConfig;
use crate::models::{ReferenceEntry, TreatmentGroup};
use crate::utils::logging::{log_operation_complete, log_operation_start};

pub use report::render_table;
pub use request::AnalysisRequest;

/// Size of one population across all treatment groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationSummary {
    pub name: String,
    /// Entries passing the population filter
    pub size: usize,
    /// Eligible entries per measurement type, in measurement type order
    pub eligible_counts: Vec<usize>,
}

/// Measurements of one population within one treatment group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationCell {
    pub population: String,
    /// One measurement per measurement type, in measurement type order
    pub measurements: Vec<Measurement>,
}

/// All population cells of one treatment group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentAnalysis {
    pub treatment: TreatmentGroup,
    /// One cell per population, in population order
    pub cells: Vec<PopulationCell>,
}

/// The measurement matrix of an analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownResult {
    pub measurement_types: Vec<MeasurementType>,
    pub populations: Vec<PopulationSummary>,
    pub treatment_analyses: Vec<TreatmentAnalysis>,
}

impl BreakdownResult {
    /// Look up the measurement of one cell
    #[must_use]
    pub fn measurement(
        &self,
        treatment: TreatmentGroup,
        population: &str,
        measurement_type: &MeasurementType,
    ) -> Option<&Measurement> {
        let type_index = self
            .measurement_types
            .iter()
            .position(|candidate| candidate == measurement_type)?;
        self.treatment_analyses
            .iter()
            .find(|analysis| analysis.treatment == treatment)?
            .cells
            .iter()
            .find(|cell| cell.population == population)?
            .measurements
            .get(type_index)
    }

    /// Whether two results hold bit-identical measurements in the same layout
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.measurement_types == other.measurement_types
            && self.populations == other.populations
            && self.treatment_analyses.len() == other.treatment_analyses.len()
            && self
                .treatment_analyses
                .iter()
                .zip(&other.treatment_analyses)
                .all(|(left, right)| {
                    left.treatment == right.treatment
                        && left.cells.len() == right.cells.len()
                        && left.cells.iter().zip(&right.cells).all(|(a, b)| {
                            a.population == b.population
                                && a.measurements.len() == b.measurements.len()
                                && a.measurements
                                    .iter()
                                    .zip(&b.measurements)
                                    .all(|(x, y)| x.is_identical(y))
                        })
                })
    }
}

/// Aggregator over treatment groups, populations and measurement types
#[derive(Debug, Clone)]
pub struct PopulationBreakdown {
    populations: Vec<PopulationDefinition>,
    measurement_types: Vec<MeasurementType>,
    config: AnalysisConfig,
}

impl PopulationBreakdown {
    #[must_use]
    pub const fn new(
        populations: Vec<PopulationDefinition>,
        measurement_types: Vec<MeasurementType>,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            populations,
            measurement_types,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Compute the measurement matrix
    #[must_use]
    pub fn analyze(&self, entries_by_treatment: &EntriesByTreatment<'_>) -> BreakdownResult {
        let start = Instant::now();
        log_operation_start(
            "Analyzing",
            &format!(
                "{} populations across {} treatment groups",
                self.populations.len(),
                entries_by_treatment.len()
            ),
        );

        let subsets = apply_population_definitions(entries_by_treatment, &self.populations);
        let mut treatment_analyses: Vec<TreatmentAnalysis> = entries_by_treatment
            .keys()
            .map(|treatment| TreatmentAnalysis {
                treatment: *treatment,
                cells: Vec::with_capacity(subsets.len()),
            })
            .collect();
        let mut populations = Vec::with_capacity(subsets.len());

        for subset in &subsets {
            let eligible = self.eligible_by_type(subset);
            let eligible_counts: Vec<usize> = eligible
                .iter()
                .map(|by_treatment| by_treatment.values().map(Vec::len).sum())
                .collect();
            log::debug!(
                "Population '{}' has {} entries, eligible per measurement {:?}",
                subset.name,
                subset.size(),
                eligible_counts
            );

            for analysis in &mut treatment_analyses {
                let measurements = self
                    .measurement_types
                    .iter()
                    .zip(&eligible)
                    .zip(&eligible_counts)
                    .map(|((measurement_type, by_treatment), population_size)| {
                        let entries = by_treatment
                            .get(&analysis.treatment)
                            .map_or(&[][..], Vec::as_slice);
                        measurement_type.calculate(entries, *population_size)
                    })
                    .collect();
                analysis.cells.push(PopulationCell {
                    population: subset.name.clone(),
                    measurements,
                });
            }

            populations.push(PopulationSummary {
                name: subset.name.clone(),
                size: subset.size(),
                eligible_counts,
            });
        }

        let cells = populations.len() * treatment_analyses.len() * self.measurement_types.len();
        log_operation_complete(
            "computed",
            "measurement cells",
            cells,
            Some(start.elapsed()),
        );

        BreakdownResult {
            measurement_types: self.measurement_types.clone(),
            populations,
            treatment_analyses,
        }
    }

    /// Entries of a subset eligible for each measurement type, per treatment group
    fn eligible_by_type<'a>(&self, subset: &PopulationSubset<'a>) -> Vec<EntriesByTreatment<'a>> {
        self.measurement_types
            .iter()
            .map(|measurement_type| {
                subset
                    .entries_by_treatment
                    .iter()
                    .map(|(treatment, entries)| {
                        let eligible: Vec<&ReferenceEntry> = entries
                            .iter()
                            .copied()
                            .filter(|entry| measurement_type.is_eligible(entry))
                            .collect();
                        (*treatment, eligible)
                    })
                    .collect()
            })
            .collect()
    }
}
