//! # AutoFeedback Strategy
//!
//! Template-based feedback for every scored criterion.
//!
//! - Passed criteria get `✓ Criterion satisfied (N%)`, the others `Room for improvement (N%)`.
//! - A failed criterion adds one suggestion: the missing items when the scorer reported any,
//!   otherwise a prompt to add related terms (nothing matched) or to expand (score below
//!   `expand_below`).
//! - Two general suggestions close the list: a short answer asks for more detail, and a low overall
//!   score points to the example solution when the exercise has one.

use crate::traits::feedback::{Feedback, FeedbackContext, FeedbackEntry, FeedbackReport};
use crate::types::CriterionScore;

#[derive(Debug, Default)]
pub struct AutoFeedback;

pub const MORE_DETAIL_SUGGESTION: &str =
    "Write a more detailed response that covers every criterion.";
pub const COMPARE_SOLUTION_SUGGESTION: &str =
    "Compare your answer with the example solution for inspiration.";

fn criterion_suggestion(result: &CriterionScore, expand_below: f64) -> Option<String> {
    if result.passed {
        return None;
    }
    if !result.missed.is_empty() {
        return Some(format!(
            "Still missing for \"{}\": {}",
            result.criterion,
            result.missed.join(", ")
        ));
    }
    if result.matched_keywords.is_empty() {
        Some(format!("Add terms related to: \"{}\"", result.criterion))
    } else if result.score < expand_below {
        Some(format!("Expand on: \"{}\"", result.criterion))
    } else {
        None
    }
}

impl Feedback for AutoFeedback {
    fn assemble_feedback(
        &self,
        ctx: &FeedbackContext<'_>,
        results: &[CriterionScore],
    ) -> FeedbackReport {
        let mut report = FeedbackReport::default();
        let expand_below = ctx.options.expand_below as f64;

        for result in results {
            let message = if result.passed {
                format!("✓ Criterion satisfied ({:.0}%)", result.score)
            } else {
                format!("Room for improvement ({:.0}%)", result.score)
            };
            report.entries.push(FeedbackEntry {
                criterion: result.criterion.clone(),
                message,
            });
            if let Some(suggestion) = criterion_suggestion(result, expand_below) {
                report.suggestions.push(suggestion);
            }
        }

        if ctx.user_input.chars().count() < ctx.options.min_answer_length {
            report.suggestions.push(MORE_DETAIL_SUGGESTION.to_string());
        }
        if ctx.overall_score < ctx.options.compare_solution_below as f64
            && ctx.exercise.solution().is_some()
        {
            report.suggestions.push(COMPARE_SOLUTION_SUGGESTION.to_string());
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Exercise;
    use std::collections::BTreeSet;
    use util::scoring_options::ScoringOptions;

    fn make_score(criterion: &str, score: f64, passed: bool, matched: &[&str], missed: &[&str]) -> CriterionScore {
        CriterionScore {
            criterion: criterion.to_string(),
            score,
            passed,
            matched_keywords: matched.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            missed: missed.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn run(exercise: &Exercise, input: &str, overall: f64, results: &[CriterionScore]) -> FeedbackReport {
        let options = ScoringOptions::default();
        let ctx = FeedbackContext {
            exercise,
            user_input: input,
            overall_score: overall,
            options: &options,
        };
        AutoFeedback.assemble_feedback(&ctx, results)
    }

    const LONG: &str = "Dit is een antwoord dat ruim lang genoeg is voor de drempel.";

    #[test]
    fn passed_criterion_has_check_mark_and_no_suggestion() {
        let ex = Exercise::new("e", "t", vec![]);
        let report = run(&ex, LONG, 80.0, &[make_score("Noemt de doelgroep", 80.0, true, &["doelgroep"], &[])]);
        assert_eq!(report.entries[0].message, "✓ Criterion satisfied (80%)");
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn nothing_matched_suggests_related_terms() {
        let ex = Exercise::new("e", "t", vec![]);
        let report = run(&ex, LONG, 0.0, &[make_score("Noemt de doelgroep", 0.0, false, &[], &[])]);
        assert_eq!(report.entries[0].message, "Room for improvement (0%)");
        assert_eq!(report.suggestions, vec!["Add terms related to: \"Noemt de doelgroep\"".to_string()]);
    }

    #[test]
    fn low_score_with_matches_suggests_expanding() {
        let ex = Exercise::new("e", "t", vec![]);
        let report = run(&ex, LONG, 33.0, &[make_score("Mentions the topic", 33.3, false, &["about"], &[])]);
        assert_eq!(report.entries[0].message, "Room for improvement (33%)");
        assert_eq!(report.suggestions, vec!["Expand on: \"Mentions the topic\"".to_string()]);
    }

    #[test]
    fn middle_band_failure_gets_no_criterion_suggestion() {
        let ex = Exercise::new("e", "t", vec![]);
        let report = run(&ex, LONG, 50.0, &[make_score("Gebruikt voorbeelden", 50.0, false, &["voorbeeld"], &[])]);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn missed_items_are_listed() {
        let ex = Exercise::new("e", "t", vec![]);
        let report = run(&ex, LONG, 0.0, &[make_score("Formaat", 0.0, false, &[], &["Formaat"])]);
        assert_eq!(report.suggestions, vec!["Still missing for \"Formaat\": Formaat".to_string()]);
    }

    #[test]
    fn short_answer_asks_for_detail() {
        let ex = Exercise::new("e", "t", vec![]);
        let report = run(&ex, "te kort", 100.0, &[]);
        assert_eq!(report.suggestions, vec![MORE_DETAIL_SUGGESTION.to_string()]);
    }

    #[test]
    fn low_overall_with_solution_points_to_solution() {
        let ex = Exercise::new("e", "t", vec![]).with_reference_solution("Voorbeeldoplossing");
        let report = run(&ex, LONG, 40.0, &[]);
        assert_eq!(report.suggestions, vec![COMPARE_SOLUTION_SUGGESTION.to_string()]);
    }

    #[test]
    fn low_overall_without_solution_does_not_point_to_solution() {
        let ex = Exercise::new("e", "t", vec![]);
        let report = run(&ex, LONG, 10.0, &[]);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn one_entry_per_result_in_order() {
        let ex = Exercise::new("e", "t", vec![]);
        let report = run(
            &ex,
            LONG,
            50.0,
            &[
                make_score("A", 100.0, true, &["a"], &[]),
                make_score("B", 0.0, false, &[], &[]),
            ],
        );
        let names: Vec<_> = report.entries.iter().map(|e| e.criterion.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
