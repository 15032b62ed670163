//! # Solution Validation
//!
//! Content-authoring lint: an exercise's own reference solution must be graded highly by the
//! evaluator. This runs in the `exercise-lint` binary and the content test suite, never while
//! grading learners.
//!
//! For concept exercises the solution is scored without the exact-copy rule, so the lint measures
//! whether the criteria and the solution actually share vocabulary. Anonymization solutions must
//! additionally be free of the exercise's sensitive spans.

use crate::detection::detect_sensitive_spans;
use crate::report::EvaluationSummary;
use crate::scorers::ConceptMatchScorer;
use crate::scorers::sensitive_span_scorer::leaked_spans;
use crate::types::{Exercise, ExerciseKind};
use crate::{DEFAULT_EVALUATOR, Evaluator};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionValidation {
    pub exercise_id: String,
    pub is_valid: bool,
    /// Score of the reference solution, 0 when there is none.
    pub score: f64,
    pub issues: Vec<String>,
}

impl Evaluator {
    /// Checks that `exercise.reference_solution` reaches `solution_validation_mark`.
    pub fn validate_exercise_solution(&self, exercise: &Exercise) -> SolutionValidation {
        let mut issues = Vec::new();

        if let Err(e) = exercise.validate() {
            issues.push(e.to_string());
        }

        let Some(solution) = exercise.solution() else {
            issues.push("exercise has no reference solution".to_string());
            return finish(exercise, 0.0, issues);
        };

        let summary: EvaluationSummary = match &exercise.kind {
            ExerciseKind::Criteria => {
                if exercise.criteria.is_empty() {
                    issues.push("exercise has no criteria".to_string());
                }
                let scorer =
                    ConceptMatchScorer::new(self.taxonomy().clone()).without_exact_solution_rule();
                self.evaluate_with(exercise, solution, &scorer)
            }
            ExerciseKind::Anonymization {
                original_text,
                sensitive_spans,
            } => {
                let spans = if sensitive_spans.is_empty() {
                    detect_sensitive_spans(original_text)
                } else {
                    sensitive_spans.clone()
                };
                if spans.is_empty() {
                    issues.push("no sensitive data found in original_text".to_string());
                }
                for span in leaked_spans(&spans, solution) {
                    issues.push(format!(
                        "reference solution still contains sensitive data ({})",
                        span.kind.label()
                    ));
                }
                if crate::text::normalize(original_text) == crate::text::normalize(solution) {
                    issues.push("reference solution is identical to the original text".to_string());
                }
                self.evaluate(exercise, solution)
            }
            ExerciseKind::Framework { .. } => self.evaluate(exercise, solution),
        };

        let required = self.options_for(exercise).solution_validation_mark as f64;
        if summary.overall_score < required {
            issues.push(format!(
                "reference solution scores {:.0}%, below the required {:.0}%",
                summary.overall_score, required
            ));
        }
        for result in summary.results.iter().filter(|r| !r.passed) {
            issues.push(format!(
                "criterion not satisfied by reference solution ({:.0}%): {}",
                result.score, result.criterion
            ));
        }

        finish(exercise, summary.overall_score, issues)
    }
}

fn finish(exercise: &Exercise, score: f64, issues: Vec<String>) -> SolutionValidation {
    if !issues.is_empty() {
        warn!(
            target: "evaluator::validation",
            exercise = %exercise.id,
            issues = issues.len(),
            score,
            "reference solution rejected"
        );
    }
    SolutionValidation {
        exercise_id: exercise.id.clone(),
        is_valid: issues.is_empty(),
        score,
        issues,
    }
}

/// Validates with the default evaluator.
pub fn validate_exercise_solution(exercise: &Exercise) -> SolutionValidation {
    DEFAULT_EVALUATOR.validate_exercise_solution(exercise)
}
