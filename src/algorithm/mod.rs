//! Algorithm implementations for metastatic outcome analyses
//!
//! This module contains the temporal interpretation of tumor records, cohort
//! and population assembly, survival estimation, and the breakdown of
//! measurements by treatment and population.

pub mod breakdown;
pub mod measurement;
pub mod population;
pub mod survival;
pub mod temporal;
