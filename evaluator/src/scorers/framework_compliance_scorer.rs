//! Scores a prompt against the components of a prompt framework (e.g. Role, Task, Context, Format).
//!
//! For every component the scorer counts signals: each signal phrase found literally in the
//! lowercased prompt, plus each prompt token that loosely matches a word of the component name.
//! A component scores `hits * 100 / min_signals`, capped at 100.

use crate::text::{extract_keywords, is_loose_token_match};
use crate::traits::scorer::Scorer;
use crate::types::{CriterionScore, Exercise, FrameworkComponent, PromptFramework};
use std::collections::BTreeSet;
use tracing::debug;
use util::scoring_options::ScoringOptions;

pub struct FrameworkComplianceScorer {
    framework: PromptFramework,
}

impl FrameworkComplianceScorer {
    pub fn new(framework: PromptFramework) -> Self {
        Self { framework }
    }
}

/// Signal count and matched phrases for one component.
pub fn component_hits(
    component: &FrameworkComponent,
    lowered_input: &str,
    input_tokens: &[String],
) -> (usize, BTreeSet<String>) {
    let mut matched = BTreeSet::new();
    let mut hits = 0;

    for signal in &component.signals {
        let signal = signal.trim().to_lowercase();
        if !signal.is_empty() && lowered_input.contains(&signal) {
            matched.insert(signal);
            hits += 1;
        }
    }

    for name_token in extract_keywords(&component.name) {
        for token in input_tokens {
            if is_loose_token_match(&name_token, token) {
                matched.insert(token.clone());
                hits += 1;
            }
        }
    }

    (hits, matched)
}

impl Scorer for FrameworkComplianceScorer {
    fn name(&self) -> &'static str {
        "framework_compliance"
    }

    fn score(
        &self,
        exercise: &Exercise,
        user_input: &str,
        options: &ScoringOptions,
    ) -> Vec<CriterionScore> {
        let lowered = user_input.to_lowercase();
        let tokens = extract_keywords(user_input);
        let min_signals = self.framework.min_signals.max(1) as f64;

        self.framework
            .components
            .iter()
            .map(|component| {
                let (hits, matched) = component_hits(component, &lowered, &tokens);
                let score = (hits as f64 * 100.0 / min_signals).min(100.0);

                debug!(
                    target: "evaluator::framework",
                    exercise = %exercise.id,
                    framework = %self.framework.name,
                    component = %component.name,
                    hits,
                    score,
                    "component scored"
                );

                CriterionScore {
                    criterion: component.name.clone(),
                    score,
                    passed: options.is_pass(score),
                    matched_keywords: matched,
                    missed: if hits == 0 {
                        vec![component.name.clone()]
                    } else {
                        vec![]
                    },
                }
            })
            .collect()
    }
}
