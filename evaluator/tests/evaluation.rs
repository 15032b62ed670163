use evaluator::feedback::auto_feedback::{COMPARE_SOLUTION_SUGGESTION, MORE_DETAIL_SUGGESTION};
use evaluator::report::EvaluationReportResponse;
use evaluator::types::{Exercise, ExerciseKind, SensitiveKind, SensitiveSpan, Severity};
use evaluator::{evaluate_exercise, Evaluator};

const SOLUTION: &str = "Leg aan leerlingen van groep acht uit wat klimaatverandering is en gebruik twee voorbeelden uit hun eigen omgeving.";

fn klimaat_exercise() -> Exercise {
    Exercise::new(
        "klimaat-uitleg",
        "Klimaat uitleggen",
        vec!["Noemt de doelgroep".to_string(), "Gebruikt voorbeelden".to_string()],
    )
    .with_reference_solution(SOLUTION)
}

fn privacy_exercise() -> Exercise {
    Exercise::new("email-anonimiseren", "E-mail anonimiseren", vec![]).with_kind(
        ExerciseKind::Anonymization {
            original_text: "Contact jan@email.com for details".to_string(),
            sensitive_spans: vec![SensitiveSpan {
                kind: SensitiveKind::Email,
                text: "jan@email.com".to_string(),
                severity: Severity::Medium,
            }],
        },
    )
}

#[test]
fn concrete_length_scenario() {
    let exercise = Exercise::new(
        "length",
        "Length",
        vec![
            "Specifies exact length requirement (3 sentences)".to_string(),
            "Mentions the topic".to_string(),
        ],
    );
    let summary = evaluate_exercise(&exercise, "Summarize this in 3 sentences about climate change");

    assert_eq!(summary.total_criteria, 2);
    assert!(summary.results[0].passed);
    assert!(summary.results[0].matched_keywords.contains("sentences"));
    assert!(!summary.results[1].passed);
    assert_eq!(summary.passed_criteria, 1);
    assert!(summary
        .suggestions
        .contains(&"Expand on: \"Mentions the topic\"".to_string()));
}

#[test]
fn evaluation_is_idempotent() {
    let exercise = klimaat_exercise();
    let input = "Leg klimaatverandering uit. De doelgroep is leerlingen.";
    let first = evaluate_exercise(&exercise, input);
    let second = evaluate_exercise(&exercise, input);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn scores_stay_within_bounds() {
    let exercise = klimaat_exercise();
    let inputs = [
        "",
        "   ",
        "doelgroep doelgroep doelgroep voorbeelden voorbeelden zoals zoals bijvoorbeeld",
        "🙂🙂🙂 !!! ???",
        SOLUTION,
        &"leerlingen voorbeeld ".repeat(200),
    ];
    for input in inputs {
        let summary = evaluate_exercise(&exercise, input);
        assert!((0.0..=100.0).contains(&summary.overall_score), "{input:?}");
        for result in &summary.results {
            assert!((0.0..=100.0).contains(&result.score), "{input:?}");
        }
    }
}

#[test]
fn empty_input_scores_zero_without_error() {
    let summary = evaluate_exercise(&klimaat_exercise(), "");
    assert_eq!(summary.overall_score, 0.0);
    assert_eq!(summary.passed_criteria, 0);
    assert!(summary.results.iter().all(|r| r.matched_keywords.is_empty()));
    assert!(summary.suggestions.contains(&MORE_DETAIL_SUGGESTION.to_string()));
    assert!(summary.suggestions.contains(&COMPARE_SOLUTION_SUGGESTION.to_string()));
}

#[test]
fn empty_criteria_score_zero() {
    let exercise = Exercise::new("leeg", "Leeg", vec![]);
    let summary = evaluate_exercise(&exercise, "Een antwoord zonder criteria om aan te toetsen.");
    assert_eq!(summary.overall_score, 0.0);
    assert!(summary.results.is_empty());
}

#[test]
fn copy_of_reference_solution_scores_exactly_100() {
    let exercise = klimaat_exercise();
    assert_eq!(evaluate_exercise(&exercise, SOLUTION).overall_score, 100.0);

    let shouted = format!("  {}  ", SOLUTION.to_uppercase());
    let summary = evaluate_exercise(&exercise, &shouted);
    assert_eq!(summary.overall_score, 100.0);
    assert!(summary.all_passed());
}

#[test]
fn adding_relevant_sentences_never_lowers_scores() {
    let exercise = klimaat_exercise();
    let steps = [
        "Leg klimaatverandering uit.",
        "Leg klimaatverandering uit. De doelgroep is leerlingen.",
        "Leg klimaatverandering uit. De doelgroep is leerlingen. Gebruik voorbeelden zoals het weer.",
    ];
    let summaries: Vec<_> = steps.iter().map(|s| evaluate_exercise(&exercise, s)).collect();

    for pair in summaries.windows(2) {
        assert!(pair[1].overall_score >= pair[0].overall_score);
        for (before, after) in pair[0].results.iter().zip(&pair[1].results) {
            assert!(after.score >= before.score, "{}", after.criterion);
        }
    }
    assert_eq!(summaries[0].overall_score, 0.0);
    assert_eq!(summaries[1].overall_score, 50.0);
    assert_eq!(summaries[2].overall_score, 100.0);
}

#[test]
fn placeholder_rewrite_lands_in_placeholder_band() {
    let summary = evaluate_exercise(&privacy_exercise(), "Contact [EMAIL] for details");
    assert_eq!(summary.total_criteria, 1);
    let score = summary.results[0].score;
    assert!((70.0..=95.0).contains(&score), "{score}");
    assert!(summary.results[0].passed);
    assert!(summary.results[0].matched_keywords.contains("[EMAIL]"));
}

#[test]
fn leaky_rewrite_scores_at_most_25() {
    let summary = evaluate_exercise(&privacy_exercise(), "Contact jan@email.com for details");
    assert!(summary.overall_score <= 25.0);
    assert!(!summary.results[0].passed);
}

#[test]
fn detected_spans_are_used_when_none_are_marked() {
    let exercise = Exercise::new("detectie", "Detectie", vec![]).with_kind(
        ExerciseKind::Anonymization {
            original_text: "Bel 06-12345678 of mail jan@email.com".to_string(),
            sensitive_spans: vec![],
        },
    );
    let leaky = evaluate_exercise(&exercise, "Bel 06-12345678 of mail [EMAIL]");
    assert!(leaky.overall_score <= 25.0);
    let clean = evaluate_exercise(&exercise, "Bel [TELEFOON] of mail [EMAIL]");
    assert!(clean.overall_score >= 70.0);
}

#[test]
fn shared_evaluator_works_across_threads() {
    let evaluator = std::sync::Arc::new(Evaluator::new());
    let exercise = std::sync::Arc::new(klimaat_exercise());
    let expected = evaluator.evaluate(&exercise, SOLUTION);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let evaluator = evaluator.clone();
            let exercise = exercise.clone();
            std::thread::spawn(move || evaluator.evaluate(&exercise, SOLUTION))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn report_envelope_serializes_summary() {
    let summary = evaluate_exercise(&klimaat_exercise(), SOLUTION);
    let response = EvaluationReportResponse::from(summary);
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["exercise_id"], "klimaat-uitleg");
    assert_eq!(value["data"]["overall_score"], 100.0);
}
