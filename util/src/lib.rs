//! Shared plumbing for the evaluator workspace: environment-driven configuration,
//! scoring thresholds, and path helpers.

pub mod config;
pub mod paths;
pub mod scoring_options;
pub mod test_helpers;
