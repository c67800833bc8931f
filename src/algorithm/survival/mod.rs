//! Censored survival estimation
//!
//! Product-limit estimation of survival curves from right-censored
//! observations, and extraction of median and quartile survival times.

pub mod kaplan_meier;

pub use crate::models::SurvivalObservation;
pub use kaplan_meier::{KaplanMeierCurve, SurvivalStep, survival_measurement};
