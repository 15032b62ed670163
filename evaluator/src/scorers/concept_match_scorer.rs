//! Scores free text against natural-language criteria.
//!
//! Each criterion is matched with [`find_matching_concepts`]. When the submission is textually
//! close to the reference solution, criteria that already score above `boost_min_score` receive
//! `near_solution_boost` extra points. A submission equal to the reference solution (ignoring case
//! and whitespace) scores 100 on every criterion.

use crate::taxonomy::ConceptTaxonomy;
use crate::text::{calculate_similarity, find_matching_concepts, normalize};
use crate::traits::scorer::Scorer;
use crate::types::{CriterionScore, Exercise};
use std::sync::Arc;
use tracing::debug;
use util::scoring_options::ScoringOptions;

pub struct ConceptMatchScorer {
    taxonomy: Arc<ConceptTaxonomy>,
    exact_solution_rule: bool,
}

impl ConceptMatchScorer {
    pub fn new(taxonomy: Arc<ConceptTaxonomy>) -> Self {
        Self {
            taxonomy,
            exact_solution_rule: true,
        }
    }

    /// Disables the full marks for an exact copy of the reference solution, so the concept matcher
    /// itself is measured. Used when validating authored solutions.
    pub fn without_exact_solution_rule(mut self) -> Self {
        self.exact_solution_rule = false;
        self
    }
}

/// Applies the near-solution boost to a raw concept score.
pub fn boosted_score(concept_score: f64, is_near_solution: bool, options: &ScoringOptions) -> f64 {
    if is_near_solution && concept_score > options.boost_min_score as f64 {
        (concept_score + options.near_solution_boost as f64).min(100.0)
    } else {
        concept_score
    }
}

impl Scorer for ConceptMatchScorer {
    fn name(&self) -> &'static str {
        "concept_match"
    }

    fn score(
        &self,
        exercise: &Exercise,
        user_input: &str,
        options: &ScoringOptions,
    ) -> Vec<CriterionScore> {
        let solution = exercise.solution();
        let solution_similarity = solution.map(|s| calculate_similarity(user_input, s));
        let is_near_solution = solution_similarity
            .is_some_and(|s| s > options.near_solution_threshold as f64);
        let is_exact_solution = self.exact_solution_rule
            && solution.is_some_and(|s| normalize(s) == normalize(user_input));

        debug!(
            target: "evaluator::concept",
            exercise = %exercise.id,
            criteria = exercise.criteria.len(),
            similarity = ?solution_similarity,
            is_near_solution,
            is_exact_solution,
            "scoring criteria"
        );

        exercise
            .criteria
            .iter()
            .map(|criterion| {
                let matched = find_matching_concepts(&self.taxonomy, criterion, user_input);
                let score = if is_exact_solution {
                    100.0
                } else {
                    boosted_score(matched.concept_score, is_near_solution, options)
                };

                debug!(
                    target: "evaluator::concept",
                    concepts = ?matched.invoked_concepts,
                    matches = matched.total_matches,
                    raw = matched.concept_score,
                    score,
                    "criterion scored"
                );

                CriterionScore {
                    criterion: criterion.clone(),
                    score,
                    passed: options.is_pass(score),
                    matched_keywords: matched.matched_keywords,
                    missed: vec![],
                }
            })
            .collect()
    }
}
