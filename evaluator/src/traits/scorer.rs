use crate::types::{CriterionScore, Exercise};
use util::scoring_options::ScoringOptions;

/// Scorer is a strategy trait for grading one submission.
///
/// Each implementation encodes one grading policy (concept matching, sensitive data removal,
/// framework compliance). Scorers are pure: the same exercise, input and options always yield the
/// same scores, and they never fail. An unusable submission simply scores low.
pub trait Scorer: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    /// Score `user_input` for `exercise`, producing one entry per evaluated criterion.
    ///
    /// - `exercise`: the authored exercise.
    /// - `user_input`: raw learner text; may be empty.
    /// - `options`: thresholds resolved for this exercise.
    fn score(
        &self,
        exercise: &Exercise,
        user_input: &str,
        options: &ScoringOptions,
    ) -> Vec<CriterionScore>;
}
