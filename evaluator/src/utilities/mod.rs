//! # Utilities
//!
//! Helpers shared across the `evaluator` crate.
//!
//! - [`file_loader`]: loading exercises and concept taxonomies from JSON files on disk.

pub mod file_loader;
