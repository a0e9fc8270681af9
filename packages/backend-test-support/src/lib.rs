//! Shared helpers for the Finora backend test suites.
//!
//! Holds the idempotent test logging bootstrap, assertions for the
//! problem-details error contract and generators for unique identities.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
