use content::lint;
use evaluator::Evaluator;
use evaluator::report::EvaluationReportResponse;
use evaluator::types::Exercise;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::error;
use tracing_appender::rolling;
use util::config;

const USAGE: &str = "usage: exercise-lint [lint | evaluate <exercise-id>]";

fn main() -> ExitCode {
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    let evaluator = match Evaluator::from_config() {
        Ok(evaluator) => evaluator,
        Err(e) => {
            eprintln!("{}: {e}", config::project_name());
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["lint"] => run_lint(&evaluator),
        ["evaluate", id] => run_evaluate(&evaluator, id),
        _ => {
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn all_exercises() -> Result<Vec<Exercise>, evaluator::error::EvaluatorError> {
    let mut exercises = content::catalog()?.to_vec();
    exercises.extend(content::extra_exercises()?);
    Ok(exercises)
}

fn run_lint(evaluator: &Evaluator) -> ExitCode {
    let exercises = match all_exercises() {
        Ok(exercises) => exercises,
        Err(e) => {
            eprintln!("failed to load exercises: {e}");
            return ExitCode::FAILURE;
        }
    };

    match lint::run(evaluator, &exercises, &mut io::stdout().lock()) {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("failed to write lint report: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_evaluate(evaluator: &Evaluator, id: &str) -> ExitCode {
    let exercises = match all_exercises() {
        Ok(exercises) => exercises,
        Err(e) => {
            eprintln!("failed to load exercises: {e}");
            return ExitCode::FAILURE;
        }
    };
    let Some(exercise) = exercises.iter().find(|e| e.id == id) else {
        eprintln!("unknown exercise: {id}");
        return ExitCode::FAILURE;
    };

    let mut answer = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut answer) {
        eprintln!("failed to read answer from stdin: {e}");
        return ExitCode::FAILURE;
    }

    let response = EvaluationReportResponse::from(evaluator.evaluate(exercise, &answer));
    match serde_json::to_string_pretty(&response) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to serialize report: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let log_dir = util::paths::log_dir();
    util::paths::ensure_dir(&log_dir).ok();

    let file_appender = rolling::daily(&log_dir, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    // stdout carries lint output and JSON reports, so console logs go to stderr.
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config::log_to_stdout() {
        registry.with(console_layer).init();
    } else {
        registry.init();
    }

    guard
}
