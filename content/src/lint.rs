//! Content lint: checks every exercise and prints one status line per exercise.

use colored::*;
use evaluator::error::EvaluatorError;
use evaluator::types::Exercise;
use evaluator::{Evaluator, SolutionValidation};
use std::collections::HashSet;
use std::io::{self, Write};

const STATUS_COLUMN: usize = 72;

/// Outcome of linting a set of exercises.
#[derive(Debug, Default)]
pub struct LintReport {
    pub checked: usize,
    pub failures: Vec<SolutionValidation>,
    pub errors: Vec<EvaluatorError>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.errors.is_empty()
    }
}

/// Validates `exercises` and writes a colored status line for each one.
pub fn run<W: Write>(
    evaluator: &Evaluator,
    exercises: &[Exercise],
    out: &mut W,
) -> io::Result<LintReport> {
    let mut report = LintReport::default();
    let mut seen = HashSet::new();

    for exercise in exercises {
        report.checked += 1;
        let base_msg = format!("Checking {}", exercise.id.bold());
        let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
        write!(out, "{}{} ", base_msg, dots)?;

        if !seen.insert(exercise.id.as_str()) {
            writeln!(out, "{}", "duplicate id".red())?;
            report
                .errors
                .push(EvaluatorError::DuplicateExercise(exercise.id.clone()));
            continue;
        }

        let validation = evaluator.validate_exercise_solution(exercise);
        let score = format!("({:.0}%)", validation.score).dimmed();
        if validation.is_valid {
            writeln!(out, "{} {}", "ok".green(), score)?;
        } else {
            writeln!(out, "{} {}", "failed".red(), score)?;
            for issue in &validation.issues {
                writeln!(out, "    {} {}", "-".yellow(), issue)?;
            }
            report.failures.push(validation);
        }
    }

    let summary = format!(
        "{} checked, {} failed",
        report.checked,
        report.failures.len() + report.errors.len()
    );
    if report.is_clean() {
        writeln!(out, "{}", summary.green().bold())?;
    } else {
        writeln!(out, "{}", summary.red().bold())?;
    }
    Ok(report)
}
