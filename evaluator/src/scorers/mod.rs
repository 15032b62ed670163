//! # Scorers
//!
//! Grading strategies for learner submissions. Every scorer implements the
//! [`Scorer`](crate::traits::scorer::Scorer) trait and shares the tokenizer and matching heuristics
//! from [`crate::text`], so the strategies cannot drift apart on what counts as a match.
//!
//! The available scorers are:
//! - [`concept_match_scorer`]: criteria scored by concept and fuzzy keyword matching.
//! - [`sensitive_span_scorer`]: anonymization exercises scored on removed personal data.
//! - [`framework_compliance_scorer`]: prompts scored on the components of a prompt framework.

pub mod concept_match_scorer;
pub mod framework_compliance_scorer;
pub mod sensitive_span_scorer;

pub use concept_match_scorer::ConceptMatchScorer;
pub use framework_compliance_scorer::FrameworkComplianceScorer;
pub use sensitive_span_scorer::SensitiveSpanScorer;

use crate::detection::detect_sensitive_spans;
use crate::taxonomy::ConceptTaxonomy;
use crate::traits::scorer::Scorer;
use crate::types::{Exercise, ExerciseKind};
use std::sync::Arc;

/// Picks the scorer matching the exercise kind.
pub fn scorer_for(exercise: &Exercise, taxonomy: Arc<ConceptTaxonomy>) -> Box<dyn Scorer> {
    match &exercise.kind {
        ExerciseKind::Criteria => Box::new(ConceptMatchScorer::new(taxonomy)),
        ExerciseKind::Anonymization {
            original_text,
            sensitive_spans,
        } => {
            let spans = if sensitive_spans.is_empty() {
                detect_sensitive_spans(original_text)
            } else {
                sensitive_spans.clone()
            };
            Box::new(SensitiveSpanScorer::new(spans))
        }
        ExerciseKind::Framework { framework } => {
            Box::new(FrameworkComplianceScorer::new(framework.clone()))
        }
    }
}
