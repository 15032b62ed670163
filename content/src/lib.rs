//! # Content
//!
//! The shipped exercise catalog. Exercise files live in `assets/exercises/` and are embedded into
//! the binary at compile time, so the catalog needs no files at runtime. Extra exercises can be
//! loaded from `CONTENT_DIR` with [`extra_exercises`].
//!
//! Every shipped exercise must parse, validate and have a reference solution that the evaluator
//! grades at or above the solution validation mark; `exercise-lint` and the `shipped_content`
//! tests enforce this.

pub mod lint;

use evaluator::error::EvaluatorError;
use evaluator::types::Exercise;
use evaluator::utilities::file_loader::load_exercises_dir;
use include_dir::{Dir, include_dir};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::{error, info};

static EXERCISES_ROOT: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/exercises");

static CATALOG: Lazy<Result<Vec<Exercise>, EvaluatorError>> = Lazy::new(load_embedded);

fn load_embedded() -> Result<Vec<Exercise>, EvaluatorError> {
    let mut files: Vec<_> = EXERCISES_ROOT
        .files()
        .filter(|f| f.path().extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort_by_key(|f| f.path());

    let mut seen = HashSet::new();
    let mut exercises = Vec::with_capacity(files.len());
    for file in files {
        let raw = file.contents_utf8().ok_or_else(|| {
            error!("Embedded exercise is not UTF-8: {}", file.path().display());
            EvaluatorError::InvalidJson("Exercise file is not UTF-8".to_string())
        })?;
        let exercise = Exercise::from_json(raw).map_err(|e| {
            error!("Invalid embedded exercise {}: {}", file.path().display(), e);
            e
        })?;
        if !seen.insert(exercise.id.clone()) {
            return Err(EvaluatorError::DuplicateExercise(exercise.id));
        }
        exercises.push(exercise);
    }

    info!(target: "content", exercises = exercises.len(), "loaded shipped catalog");
    Ok(exercises)
}

/// All shipped exercises, in file name order.
pub fn catalog() -> Result<&'static [Exercise], EvaluatorError> {
    CATALOG.as_deref().map_err(Clone::clone)
}

/// Shipped exercise with the given id. `None` also when the catalog itself fails to load.
pub fn find(id: &str) -> Option<&'static Exercise> {
    catalog().ok()?.iter().find(|e| e.id == id)
}

/// Exercises from `CONTENT_DIR`, or none when it is not configured.
pub fn extra_exercises() -> Result<Vec<Exercise>, EvaluatorError> {
    match util::paths::content_dir() {
        Some(dir) => load_exercises_dir(&dir),
        None => Ok(Vec::new()),
    }
}
