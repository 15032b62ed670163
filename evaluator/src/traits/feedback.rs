//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait and the [`FeedbackEntry`] struct, which are used to
//! implement pluggable feedback strategies for the evaluator.
//!
//! A feedback strategy receives the scored criteria of a submission and produces one feedback
//! message per criterion plus an ordered list of improvement suggestions.

use crate::types::{CriterionScore, Exercise};
use serde::Serialize;
use util::scoring_options::ScoringOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub criterion: String,
    pub message: String,
}

/// Everything a feedback strategy may look at besides the scores themselves.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackContext<'a> {
    pub exercise: &'a Exercise,
    pub user_input: &'a str,
    pub overall_score: f64,
    pub options: &'a ScoringOptions,
}

/// Output of a feedback strategy. `entries` line up with the scored criteria.
/// Suggestions may contain duplicates; the aggregator removes them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackReport {
    pub entries: Vec<FeedbackEntry>,
    pub suggestions: Vec<String>,
}

/// A trait for pluggable feedback strategies.
///
/// # Arguments
/// - `ctx`: exercise, raw input, overall score and thresholds.
/// - `results`: the scored criteria, in evaluation order.
///
/// # Returns
/// A [`FeedbackReport`] with exactly one entry per result.
pub trait Feedback: Send + Sync {
    fn assemble_feedback(&self, ctx: &FeedbackContext<'_>, results: &[CriterionScore])
        -> FeedbackReport;
}
