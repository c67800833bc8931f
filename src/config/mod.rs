//! Configuration for outcome analyses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OutcomeError, Result};

/// Estimates over this many patients or fewer are not shown
pub const DEFAULT_MIN_PATIENTS_FOR_ESTIMATE: usize = 20;

/// Suppression threshold used by earlier report versions
pub const LEGACY_MIN_PATIENTS_FOR_ESTIMATE: usize = 5;

/// Default progression-free threshold (days after treatment start)
pub const DEFAULT_PROGRESSION_FREE_THRESHOLD: i32 = 365;

/// Configuration for an outcome analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Estimates over at most this many patients render as a sample-size caveat
    pub min_patients_for_estimate: usize,
    /// Thresholds (days after treatment start) of the default progression-free measurements
    pub progression_free_thresholds: Vec<i32>,
    /// Decimals shown for percentages
    pub decimals: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_patients_for_estimate: DEFAULT_MIN_PATIENTS_FOR_ESTIMATE,
            progression_free_thresholds: vec![DEFAULT_PROGRESSION_FREE_THRESHOLD],
            decimals: 1,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing an analysis configuration
    #[must_use]
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Check that the configuration can be used for an analysis
    pub fn validate(&self) -> Result<()> {
        if let Some(days) = self.progression_free_thresholds.iter().find(|days| **days <= 0) {
            return Err(OutcomeError::config_error(format!(
                "progression-free threshold must be positive, got {days}"
            )));
        }
        if self.decimals > 6 {
            return Err(OutcomeError::config_error(format!(
                "at most 6 decimals are supported, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}

impl fmt::Display for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Configuration:")?;
        writeln!(
            f,
            "  Minimum Patients For Estimate: {}",
            self.min_patients_for_estimate
        )?;
        writeln!(
            f,
            "  Progression-Free Thresholds: {:?}",
            self.progression_free_thresholds
        )?;
        writeln!(f, "  Decimals: {}", self.decimals)
    }
}

/// Builder for constructing an analysis configuration
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the small-sample suppression threshold
    #[must_use]
    pub const fn min_patients_for_estimate(mut self, min_patients: usize) -> Self {
        self.config.min_patients_for_estimate = min_patients;
        self
    }

    /// Set the progression-free thresholds
    #[must_use]
    pub fn progression_free_thresholds(mut self, thresholds: Vec<i32>) -> Self {
        self.config.progression_free_thresholds = thresholds;
        self
    }

    /// Set the decimals shown for percentages
    #[must_use]
    pub const fn decimals(mut self, decimals: usize) -> Self {
        self.config.decimals = decimals;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> AnalysisConfig {
        self.config
    }
}
