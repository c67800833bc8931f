//! Utilities shared across the crate
//!
//! Logging and progress helpers, and fixtures used by the test suites.

pub mod logging;
pub mod test;
