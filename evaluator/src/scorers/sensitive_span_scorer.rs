//! Scores anonymization exercises.
//!
//! Grading is a three-way decision rather than additive scoring:
//!
//! 1. The rewrite equals the expected solution (ignoring case and whitespace): 100.
//! 2. Any known sensitive span is still present: at most [`LEAK_CAP`], scaled by the share of spans
//!    that was removed.
//! 3. Everything removed: [`PLACEHOLDER_BASE`] plus [`PLACEHOLDER_STEP`] per span (capped at
//!    [`PLACEHOLDER_CAP`]) when the rewrite uses `[UPPERCASE]` placeholders, otherwise
//!    [`CLEAN_BASE`] plus [`CLEAN_STEP`] per span (capped at [`CLEAN_CAP`]).
//!
//! An empty rewrite scores 0.

use crate::text::{extract_keywords, normalize};
use crate::traits::scorer::Scorer;
use crate::types::{CriterionScore, Exercise, SensitiveSpan};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;
use util::scoring_options::ScoringOptions;

pub const LEAK_CAP: f64 = 25.0;
pub const PLACEHOLDER_BASE: f64 = 70.0;
pub const PLACEHOLDER_STEP: f64 = 5.0;
pub const PLACEHOLDER_CAP: f64 = 95.0;
pub const CLEAN_BASE: f64 = 50.0;
pub const CLEAN_STEP: f64 = 3.0;
pub const CLEAN_CAP: f64 = 80.0;

pub const ANONYMIZATION_CRITERION: &str = "All sensitive data is removed or replaced";

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[A-Z_]+\]").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnonymizationBranch {
    Empty,
    ExactSolution,
    Leaked,
    Placeholders,
    Clean,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnonymizationOutcome {
    pub score: f64,
    pub branch: AnonymizationBranch,
    /// Spans still present in the rewrite.
    pub leaked: Vec<SensitiveSpan>,
    /// Distinct placeholders used in the rewrite.
    pub placeholders: BTreeSet<String>,
}

/// Spans whose literal text still occurs in `text`, compared case-insensitively.
pub fn leaked_spans(spans: &[SensitiveSpan], text: &str) -> Vec<SensitiveSpan> {
    let lowered = text.to_lowercase();
    spans
        .iter()
        .filter(|span| {
            let needle = span.text.trim().to_lowercase();
            !needle.is_empty() && lowered.contains(&needle)
        })
        .cloned()
        .collect()
}

/// Bracketed uppercase placeholders such as `[EMAIL]` found in `text`.
pub fn find_placeholders(text: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Grades an anonymized rewrite.
pub fn score_anonymization(
    spans: &[SensitiveSpan],
    expected: Option<&str>,
    rewrite: &str,
) -> AnonymizationOutcome {
    let placeholders = find_placeholders(rewrite);

    if extract_keywords(rewrite).is_empty() && placeholders.is_empty() {
        return AnonymizationOutcome {
            score: 0.0,
            branch: AnonymizationBranch::Empty,
            leaked: vec![],
            placeholders,
        };
    }

    if expected.is_some_and(|e| normalize(e) == normalize(rewrite)) {
        return AnonymizationOutcome {
            score: 100.0,
            branch: AnonymizationBranch::ExactSolution,
            leaked: vec![],
            placeholders,
        };
    }

    let issues = spans.len() as f64;
    let leaked = leaked_spans(spans, rewrite);
    if !leaked.is_empty() {
        let removed = issues - leaked.len() as f64;
        let score = (LEAK_CAP * removed / issues).clamp(0.0, LEAK_CAP);
        return AnonymizationOutcome {
            score,
            branch: AnonymizationBranch::Leaked,
            leaked,
            placeholders,
        };
    }

    if !placeholders.is_empty() {
        let score = (PLACEHOLDER_BASE + PLACEHOLDER_STEP * issues).min(PLACEHOLDER_CAP);
        AnonymizationOutcome {
            score,
            branch: AnonymizationBranch::Placeholders,
            leaked,
            placeholders,
        }
    } else {
        let score = (CLEAN_BASE + CLEAN_STEP * issues).min(CLEAN_CAP);
        AnonymizationOutcome {
            score,
            branch: AnonymizationBranch::Clean,
            leaked,
            placeholders,
        }
    }
}

pub struct SensitiveSpanScorer {
    spans: Vec<SensitiveSpan>,
}

impl SensitiveSpanScorer {
    pub fn new(spans: Vec<SensitiveSpan>) -> Self {
        Self { spans }
    }

    pub fn spans(&self) -> &[SensitiveSpan] {
        &self.spans
    }
}

impl Scorer for SensitiveSpanScorer {
    fn name(&self) -> &'static str {
        "sensitive_span"
    }

    fn score(
        &self,
        exercise: &Exercise,
        user_input: &str,
        options: &ScoringOptions,
    ) -> Vec<CriterionScore> {
        let outcome = score_anonymization(&self.spans, exercise.solution(), user_input);

        debug!(
            target: "evaluator::privacy",
            exercise = %exercise.id,
            spans = self.spans.len(),
            leaked = outcome.leaked.len(),
            branch = ?outcome.branch,
            score = outcome.score,
            "anonymization scored"
        );

        let mut missed: Vec<String> = outcome
            .leaked
            .iter()
            .map(|span| span.kind.label().to_string())
            .collect();
        missed.sort();
        missed.dedup();

        vec![CriterionScore {
            criterion: ANONYMIZATION_CRITERION.to_string(),
            score: outcome.score,
            passed: options.is_pass(outcome.score),
            matched_keywords: outcome.placeholders,
            missed,
        }]
    }
}
