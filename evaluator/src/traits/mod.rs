//!
//! Traits Module
//!
//! Core seams of the evaluator.
//!
//! - [`scorer`]: strategy trait turning an exercise and a submission into per-criterion scores.
//! - [`feedback`]: strategy trait turning those scores into feedback text and suggestions.

pub mod feedback;
pub mod scorer;
