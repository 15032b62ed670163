use serde::{Deserialize, Serialize};

use crate::config;

/// Thresholds used while scoring a submission.
///
/// All scores are percentages (0-100). Every field has a default so an exercise may
/// override only the values it cares about.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoringOptions {
    /// Minimum criterion score counted as passed.
    #[serde(default = "default_pass_mark")]
    pub pass_mark: u32,

    /// Similarity to the reference solution above which the near-solution boost applies.
    #[serde(default = "default_near_solution_threshold")]
    pub near_solution_threshold: u32,

    /// Points added to a criterion score for near-solution submissions.
    #[serde(default = "default_near_solution_boost")]
    pub near_solution_boost: u32,

    /// A criterion must score above this before the boost is added.
    #[serde(default = "default_boost_min_score")]
    pub boost_min_score: u32,

    /// Failed criteria scoring below this get an "expand on" suggestion.
    #[serde(default = "default_expand_below")]
    pub expand_below: u32,

    /// Answers shorter than this many characters get a "be more detailed" suggestion.
    #[serde(default = "default_min_answer_length")]
    pub min_answer_length: usize,

    /// Overall scores below this point the learner to the example solution.
    #[serde(default = "default_compare_solution_below")]
    pub compare_solution_below: u32,

    /// Minimum score a reference solution must reach on its own exercise.
    #[serde(default = "default_solution_validation_mark")]
    pub solution_validation_mark: u32,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            pass_mark: default_pass_mark(),
            near_solution_threshold: default_near_solution_threshold(),
            near_solution_boost: default_near_solution_boost(),
            boost_min_score: default_boost_min_score(),
            expand_below: default_expand_below(),
            min_answer_length: default_min_answer_length(),
            compare_solution_below: default_compare_solution_below(),
            solution_validation_mark: default_solution_validation_mark(),
        }
    }
}

impl ScoringOptions {
    /// Defaults with the pass mark taken from the global [`config::AppConfig`].
    pub fn from_app_config() -> Self {
        Self {
            pass_mark: config::pass_mark(),
            ..Self::default()
        }
    }

    pub fn with_pass_mark(mut self, pass_mark: u32) -> Self {
        self.pass_mark = pass_mark.min(100);
        self
    }

    pub fn is_pass(&self, score: f64) -> bool {
        score >= self.pass_mark as f64
    }
}

fn default_pass_mark() -> u32 {
    60
}

fn default_near_solution_threshold() -> u32 {
    70
}

fn default_near_solution_boost() -> u32 {
    20
}

fn default_boost_min_score() -> u32 {
    50
}

fn default_expand_below() -> u32 {
    40
}

fn default_min_answer_length() -> usize {
    30
}

fn default_compare_solution_below() -> u32 {
    50
}

fn default_solution_validation_mark() -> u32 {
    90
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let opts: ScoringOptions = serde_json::from_str(r#"{ "pass_mark": 70 }"#).unwrap();
        assert_eq!(opts.pass_mark, 70);
        assert_eq!(opts.near_solution_threshold, 70);
        assert_eq!(opts.near_solution_boost, 20);
        assert_eq!(opts.min_answer_length, 30);
    }

    #[test]
    fn empty_json_equals_default() {
        let opts: ScoringOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ScoringOptions::default());
    }

    #[test]
    fn pass_mark_is_inclusive() {
        let opts = ScoringOptions::default();
        assert!(opts.is_pass(60.0));
        assert!(!opts.is_pass(59.99));
    }

    #[test]
    fn with_pass_mark_clamps_to_100() {
        assert_eq!(ScoringOptions::default().with_pass_mark(140).pass_mark, 100);
    }
}
