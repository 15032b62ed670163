//! # Types Module
//!
//! This module defines the core data structures used throughout the evaluator: the authored
//! [`Exercise`] definition (and the strategy-specific data attached to it) and the per-criterion
//! results produced while scoring a submission.

use crate::error::EvaluatorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use util::scoring_options::ScoringOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Category of a piece of personal data inside an anonymization exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitiveKind {
    Name,
    Email,
    Phone,
    Address,
    Postcode,
    Iban,
    Bsn,
    Date,
    Other,
}

impl SensitiveKind {
    /// Placeholder learners are expected to use for this kind, e.g. `[EMAIL]`.
    pub fn placeholder(&self) -> &'static str {
        match self {
            SensitiveKind::Name => "[NAAM]",
            SensitiveKind::Email => "[EMAIL]",
            SensitiveKind::Phone => "[TELEFOON]",
            SensitiveKind::Address => "[ADRES]",
            SensitiveKind::Postcode => "[POSTCODE]",
            SensitiveKind::Iban => "[IBAN]",
            SensitiveKind::Bsn => "[BSN]",
            SensitiveKind::Date => "[DATUM]",
            SensitiveKind::Other => "[GEGEVENS]",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SensitiveKind::Name => "name",
            SensitiveKind::Email => "email",
            SensitiveKind::Phone => "phone",
            SensitiveKind::Address => "address",
            SensitiveKind::Postcode => "postcode",
            SensitiveKind::Iban => "iban",
            SensitiveKind::Bsn => "bsn",
            SensitiveKind::Date => "date",
            SensitiveKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A literal piece of sensitive data the learner has to remove.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SensitiveSpan {
    #[serde(alias = "type")]
    pub kind: SensitiveKind,
    pub text: String,
    pub severity: Severity,
}

/// One building block of a prompt framework, e.g. "Role" or "Format".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FrameworkComponent {
    pub name: String,
    /// Phrases that signal the component is present, matched case-insensitively.
    #[serde(default)]
    pub signals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PromptFramework {
    pub name: String,
    pub components: Vec<FrameworkComponent>,
    /// Number of signals needed for a component to score 100.
    #[serde(default = "default_min_signals")]
    pub min_signals: u32,
}

fn default_min_signals() -> u32 {
    2
}

/// Selects the scoring strategy for an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Free text scored against natural-language criteria.
    #[default]
    Criteria,
    /// Rewrite `original_text` without personal data. The expected rewrite is the
    /// exercise's reference solution. Empty `sensitive_spans` are detected automatically.
    Anonymization {
        original_text: String,
        #[serde(default)]
        sensitive_spans: Vec<SensitiveSpan>,
    },
    /// Write a prompt that follows a named framework.
    Framework { framework: PromptFramework },
}

/// An authored exercise. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prompt_text: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Evaluation order only; the order carries no weight in the score.
    #[serde(default, alias = "evaluation_criteria")]
    pub criteria: Vec<String>,
    #[serde(default)]
    pub reference_solution: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub kind: ExerciseKind,
    /// Replaces the evaluator's thresholds for this exercise.
    #[serde(default)]
    pub scoring: Option<ScoringOptions>,
}

impl Exercise {
    /// Minimal criteria exercise, mostly useful in tests and examples.
    pub fn new(id: impl Into<String>, title: impl Into<String>, criteria: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            prompt_text: String::new(),
            difficulty: Difficulty::default(),
            criteria,
            reference_solution: None,
            hints: vec![],
            tips: vec![],
            kind: ExerciseKind::default(),
            scoring: None,
        }
    }

    pub fn with_reference_solution(mut self, solution: impl Into<String>) -> Self {
        self.reference_solution = Some(solution.into());
        self
    }

    pub fn with_kind(mut self, kind: ExerciseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Reference solution, ignoring blank strings.
    pub fn solution(&self) -> Option<&str> {
        self.reference_solution
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// Parses and validates a single exercise from JSON.
    pub fn from_json(raw: &str) -> Result<Self, EvaluatorError> {
        let exercise: Exercise = serde_json::from_str(raw)?;
        exercise.validate()?;
        Ok(exercise)
    }

    /// Structural checks for authored content.
    pub fn validate(&self) -> Result<(), EvaluatorError> {
        if self.id.trim().is_empty() {
            return Err(EvaluatorError::MissingField("id".to_string()));
        }
        match &self.kind {
            ExerciseKind::Criteria => {}
            ExerciseKind::Anonymization { original_text, .. } => {
                if original_text.trim().is_empty() {
                    return Err(EvaluatorError::MissingField(format!(
                        "{}: original_text",
                        self.id
                    )));
                }
            }
            ExerciseKind::Framework { framework } => {
                if framework.components.is_empty() {
                    return Err(EvaluatorError::InvalidExercise(format!(
                        "{}: framework '{}' has no components",
                        self.id, framework.name
                    )));
                }
                if framework.min_signals == 0 {
                    return Err(EvaluatorError::InvalidExercise(format!(
                        "{}: min_signals must be at least 1",
                        self.id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Raw outcome of scoring one criterion, before feedback text is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionScore {
    /// The criterion (or framework component / anonymization check) that was scored.
    pub criterion: String,
    /// Score between 0 and 100.
    pub score: f64,
    pub passed: bool,
    /// Keywords from the submission that contributed to the score.
    pub matched_keywords: BTreeSet<String>,
    /// Items that were expected but not found, or found but should be gone.
    pub missed: Vec<String>,
}

/// Per-criterion outcome as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionResult {
    pub criterion: String,
    pub passed: bool,
    /// Score between 0 and 100.
    pub score: f64,
    pub matched_keywords: BTreeSet<String>,
    pub feedback: String,
}
