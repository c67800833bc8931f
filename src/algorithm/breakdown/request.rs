//! Analysis requests loaded from JSON

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::algorithm::measurement::{MeasurementType, default_measurement_types};
use crate::algorithm::population::{PopulationDefinition, standard_population_definitions};
use crate::config::AnalysisConfig;
use crate::error::Result;

/// A complete analysis request: populations, measurements and configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub config: AnalysisConfig,
    /// Populations to report; the standard set when empty
    pub populations: Vec<PopulationDefinition>,
    /// Measurements to report; the default set when empty
    pub measurement_types: Vec<MeasurementType>,
}

impl AnalysisRequest {
    /// Load a request from a JSON file and validate its configuration
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let request: Self = serde_json::from_str(&content)?;
        request.config.validate()?;
        Ok(request)
    }

    /// Populations to report, falling back to the standard set
    #[must_use]
    pub fn populations_or_default(&self) -> Vec<PopulationDefinition> {
        if self.populations.is_empty() {
            standard_population_definitions()
        } else {
            self.populations.clone()
        }
    }

    /// Measurements to report, falling back to the default set
    #[must_use]
    pub fn measurement_types_or_default(&self) -> Vec<MeasurementType> {
        if self.measurement_types.is_empty() {
            default_measurement_types(&self.config.progression_free_thresholds)
        } else {
            self.measurement_types.clone()
        }
    }
}
