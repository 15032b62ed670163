//! # Evaluator Library
//!
//! Deterministic, explainable scoring of short free-text answers to prompt-engineering and
//! privacy exercises.
//!
//! ## Key Concepts
//! - **Exercise**: the authored task, its criteria and an optional reference solution.
//! - **Scorers**: pluggable grading strategies selected per exercise kind (concept matching,
//!   sensitive data removal, framework compliance).
//! - **Feedback**: turns scores into per-criterion messages and improvement suggestions.
//! - **Summary**: overall score, pass counts and deduplicated suggestions for one submission.
//!
//! Evaluation never fails. Empty answers, exercises without criteria and missing reference
//! solutions all degrade to low scores instead of errors.
//!
//! ```
//! use evaluator::types::Exercise;
//!
//! let exercise = Exercise::new(
//!     "length",
//!     "Length",
//!     vec!["Specifies exact length requirement (3 sentences)".to_string()],
//! );
//! let summary = evaluator::evaluate_exercise(&exercise, "Summarize this in 3 sentences about climate change");
//! assert!(summary.results[0].passed);
//! ```

pub mod detection;
pub mod error;
pub mod feedback;
pub mod report;
pub mod scorers;
pub mod summary;
pub mod taxonomy;
pub mod text;
pub mod traits;
pub mod types;
pub mod utilities;
pub mod validation;

use crate::error::EvaluatorError;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::report::EvaluationSummary;
use crate::scorers::scorer_for;
use crate::summary::{compute_overall_score, summarize};
use crate::taxonomy::{ConceptTaxonomy, DEFAULT_TAXONOMY};
use crate::traits::feedback::{Feedback, FeedbackContext};
use crate::traits::scorer::Scorer;
use crate::types::Exercise;

use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, info};
use util::scoring_options::ScoringOptions;

pub use crate::validation::{validate_exercise_solution, SolutionValidation};

/// Evaluates submissions against exercises.
///
/// Holds only immutable configuration: the concept taxonomy, the default thresholds and the
/// feedback strategy. It is `Send + Sync` and can be shared between threads without locking.
pub struct Evaluator {
    taxonomy: Arc<ConceptTaxonomy>,
    options: ScoringOptions,
    feedback: Box<dyn Feedback>,
}

pub(crate) static DEFAULT_EVALUATOR: Lazy<Evaluator> = Lazy::new(Evaluator::default);

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            taxonomy: DEFAULT_TAXONOMY.clone(),
            options: ScoringOptions::default(),
            feedback: Box::new(AutoFeedback),
        }
    }
}

impl Evaluator {
    /// Evaluator with the built-in taxonomy and default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator configured from the environment: `PASS_MARK` and, when set, the taxonomy file at
    /// `TAXONOMY_PATH`.
    pub fn from_config() -> Result<Self, EvaluatorError> {
        let mut evaluator = Self::default().with_options(ScoringOptions::from_app_config());
        if let Some(path) = util::paths::taxonomy_path() {
            let taxonomy = utilities::file_loader::load_taxonomy(&path)?;
            info!(
                target: "evaluator",
                path = %path.display(),
                concepts = taxonomy.len(),
                "loaded concept taxonomy"
            );
            evaluator = evaluator.with_taxonomy(taxonomy);
        }
        Ok(evaluator)
    }

    pub fn with_taxonomy(mut self, taxonomy: ConceptTaxonomy) -> Self {
        self.taxonomy = Arc::new(taxonomy);
        self
    }

    pub fn with_shared_taxonomy(mut self, taxonomy: Arc<ConceptTaxonomy>) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    pub fn with_options(mut self, options: ScoringOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a custom feedback strategy.
    pub fn with_feedback<F: Feedback + 'static>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    pub fn taxonomy(&self) -> &Arc<ConceptTaxonomy> {
        &self.taxonomy
    }

    /// Thresholds for `exercise`: its own `scoring` block when present, otherwise the evaluator's.
    pub fn options_for<'a>(&'a self, exercise: &'a Exercise) -> &'a ScoringOptions {
        exercise.scoring.as_ref().unwrap_or(&self.options)
    }

    /// Scorer matching the exercise kind.
    pub fn scorer_for(&self, exercise: &Exercise) -> Box<dyn Scorer> {
        scorer_for(exercise, self.taxonomy.clone())
    }

    /// Evaluate `user_input` for `exercise` with the scorer selected by the exercise kind.
    pub fn evaluate(&self, exercise: &Exercise, user_input: &str) -> EvaluationSummary {
        let scorer = self.scorer_for(exercise);
        self.evaluate_with(exercise, user_input, scorer.as_ref())
    }

    /// Evaluate with an explicit scorer.
    ///
    /// # Steps
    /// 1. Resolves the thresholds for the exercise.
    /// 2. Scores every criterion with `scorer`.
    /// 3. Averages the scores.
    /// 4. Builds feedback and suggestions with the configured strategy.
    /// 5. Aggregates everything into an [`EvaluationSummary`].
    pub fn evaluate_with(
        &self,
        exercise: &Exercise,
        user_input: &str,
        scorer: &dyn Scorer,
    ) -> EvaluationSummary {
        let options = self.options_for(exercise);
        let scores = scorer.score(exercise, user_input, options);
        let overall_score = compute_overall_score(&scores);

        let ctx = FeedbackContext {
            exercise,
            user_input,
            overall_score,
            options,
        };
        let feedback = self.feedback.assemble_feedback(&ctx, &scores);
        let summary = summarize(&exercise.id, overall_score, scores, feedback);

        debug!(
            target: "evaluator",
            exercise = %exercise.id,
            scorer = scorer.name(),
            input_len = user_input.chars().count(),
            overall = summary.overall_score,
            passed = summary.passed_criteria,
            total = summary.total_criteria,
            "evaluation complete"
        );

        summary
    }
}

/// Evaluate with the process-wide default evaluator (built-in taxonomy, default thresholds).
pub fn evaluate_exercise(exercise: &Exercise, user_input: &str) -> EvaluationSummary {
    DEFAULT_EVALUATOR.evaluate(exercise, user_input)
}
