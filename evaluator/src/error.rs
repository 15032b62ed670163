//! Evaluator Error Types
//!
//! This module defines the [`EvaluatorError`] enum, covering everything that can go wrong while
//! loading exercise content or a concept taxonomy. Scoring itself never returns an error: a bad
//! submission is expressed as a low score, not a failure.
//!
//! # Example
//!
//! ```rust
//! use evaluator::error::EvaluatorError;
//!
//! fn require_id(id: &str) -> Result<(), EvaluatorError> {
//!     if id.trim().is_empty() {
//!         return Err(EvaluatorError::MissingField("id".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt;

/// Represents all error types that can occur while loading evaluator content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluatorError {
    /// I/O error (file not found, unreadable, too large, etc.).
    IoError(String),
    /// JSON is malformed or does not match the expected schema.
    InvalidJson(String),
    /// A required field is missing or empty.
    MissingField(String),
    /// The exercise is structurally unusable (e.g. a framework without components).
    InvalidExercise(String),
    /// Two exercises share the same id.
    DuplicateExercise(String),
    /// The concept taxonomy is malformed.
    InvalidTaxonomy(String),
}

impl fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluatorError::IoError(msg) => write!(f, "I/O error: {msg}"),
            EvaluatorError::InvalidJson(msg) => write!(f, "invalid JSON: {msg}"),
            EvaluatorError::MissingField(field) => write!(f, "missing field: {field}"),
            EvaluatorError::InvalidExercise(msg) => write!(f, "invalid exercise: {msg}"),
            EvaluatorError::DuplicateExercise(id) => write!(f, "duplicate exercise id: {id}"),
            EvaluatorError::InvalidTaxonomy(msg) => write!(f, "invalid taxonomy: {msg}"),
        }
    }
}

impl std::error::Error for EvaluatorError {}

impl From<serde_json::Error> for EvaluatorError {
    fn from(err: serde_json::Error) -> Self {
        EvaluatorError::InvalidJson(err.to_string())
    }
}
