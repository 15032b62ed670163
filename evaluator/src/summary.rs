//! # Summary Module
//!
//! Aggregates scored criteria and their feedback into an [`EvaluationSummary`].
//!
//! The overall score is the plain mean of the criterion scores; an exercise without criteria
//! scores 0. Suggestions are deduplicated keeping the first occurrence.

use crate::report::EvaluationSummary;
use crate::traits::feedback::FeedbackReport;
use crate::types::{CriterionResult, CriterionScore};
use std::collections::HashSet;

/// Mean of the criterion scores, 0 for an empty slice.
///
/// ```
/// use evaluator::summary::compute_overall_score;
/// use evaluator::types::CriterionScore;
///
/// let score = |s: f64| CriterionScore {
///     criterion: "c".to_string(),
///     score: s,
///     passed: s >= 60.0,
///     matched_keywords: Default::default(),
///     missed: vec![],
/// };
/// assert_eq!(compute_overall_score(&[score(100.0), score(50.0)]), 75.0);
/// assert_eq!(compute_overall_score(&[]), 0.0);
/// ```
pub fn compute_overall_score(results: &[CriterionScore]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: f64 = results.iter().map(|r| r.score).sum();
    (total / results.len() as f64).clamp(0.0, 100.0)
}

/// Removes repeated suggestions, keeping the order of first appearance.
pub fn dedup_suggestions(suggestions: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Combines scores and feedback into the final summary.
///
/// `feedback.entries` must line up with `scores`; missing entries leave the feedback text empty.
pub fn summarize(
    exercise_id: &str,
    overall_score: f64,
    scores: Vec<CriterionScore>,
    feedback: FeedbackReport,
) -> EvaluationSummary {
    let total_criteria = scores.len();
    let passed_criteria = scores.iter().filter(|s| s.passed).count();

    let mut messages = feedback.entries.into_iter();
    let results = scores
        .into_iter()
        .map(|score| CriterionResult {
            feedback: messages.next().map(|e| e.message).unwrap_or_default(),
            criterion: score.criterion,
            passed: score.passed,
            score: score.score.clamp(0.0, 100.0),
            matched_keywords: score.matched_keywords,
        })
        .collect();

    EvaluationSummary {
        exercise_id: exercise_id.to_string(),
        overall_score,
        total_criteria,
        passed_criteria,
        results,
        suggestions: dedup_suggestions(feedback.suggestions),
    }
}
