//!
//! File Loader Utility
//!
//! Loads authored content from disk: single exercises, whole exercise directories and concept
//! taxonomies. Every file is checked for existence, type and size before it is read, and every
//! exercise is validated after parsing.
//!
//! # Error Handling
//!
//! Returns [`EvaluatorError`] variants with short, general messages. The specific cause (path,
//! byte counts, parser message) is logged with `tracing::error!`.

use crate::error::EvaluatorError;
use crate::taxonomy::ConceptTaxonomy;
use crate::types::Exercise;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::error;

/// Maximum allowed size for JSON files.
const MAX_JSON_SIZE: u64 = 2 * 1024 * 1024; // 2MB

/// Checks that a file exists, is a file, and (optionally) does not exceed a maximum size.
///
/// # Errors
///
/// Returns [`EvaluatorError::IoError`] if the file is missing, not a file, unreadable, or too large.
fn check_file(path: &Path, max_size: Option<u64>) -> Result<(), EvaluatorError> {
    if !path.exists() {
        error!("File not found: {}", path.display());
        return Err(EvaluatorError::IoError("File not found".to_string()));
    }

    if !path.is_file() {
        error!("Not a file: {}", path.display());
        return Err(EvaluatorError::IoError("Invalid file type".to_string()));
    }

    let metadata = fs::metadata(path).map_err(|e| {
        error!("File unreadable: {} - {}", path.display(), e);
        EvaluatorError::IoError("File unreadable".to_string())
    })?;

    if let Some(max) = max_size {
        if metadata.len() > max {
            error!(
                "File too large: {} ({} bytes, max {} bytes)",
                path.display(),
                metadata.len(),
                max
            );
            return Err(EvaluatorError::IoError("File too large".to_string()));
        }
    }

    Ok(())
}

fn read_json_file(path: &Path) -> Result<String, EvaluatorError> {
    check_file(path, Some(MAX_JSON_SIZE))?;
    fs::read_to_string(path).map_err(|e| {
        error!("Failed to read {}: {}", path.display(), e);
        EvaluatorError::IoError("Failed to read file".to_string())
    })
}

/// Loads and validates one exercise file.
pub fn load_exercise(path: &Path) -> Result<Exercise, EvaluatorError> {
    let raw = read_json_file(path)?;
    Exercise::from_json(&raw).map_err(|e| {
        error!("Invalid exercise in {}: {}", path.display(), e);
        e
    })
}

/// Loads every `*.json` file in `dir`, in file name order.
///
/// # Errors
///
/// Fails on the first unreadable or invalid file, and with
/// [`EvaluatorError::DuplicateExercise`] when two files declare the same id.
pub fn load_exercises_dir(dir: &Path) -> Result<Vec<Exercise>, EvaluatorError> {
    if !dir.is_dir() {
        error!("Not a directory: {}", dir.display());
        return Err(EvaluatorError::IoError("Invalid directory".to_string()));
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        error!("Directory unreadable: {} - {}", dir.display(), e);
        EvaluatorError::IoError("Directory unreadable".to_string())
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut seen = HashSet::new();
    let mut exercises = Vec::with_capacity(paths.len());
    for path in &paths {
        let exercise = load_exercise(path)?;
        if !seen.insert(exercise.id.clone()) {
            error!("Duplicate exercise id '{}' in {}", exercise.id, path.display());
            return Err(EvaluatorError::DuplicateExercise(exercise.id));
        }
        exercises.push(exercise);
    }
    Ok(exercises)
}

/// Loads a concept taxonomy file (`{"concepts": [{"name": ..., "keywords": [...]}]}`).
pub fn load_taxonomy(path: &Path) -> Result<ConceptTaxonomy, EvaluatorError> {
    let raw = read_json_file(path)?;
    ConceptTaxonomy::from_json(&raw).map_err(|e| {
        error!("Invalid taxonomy in {}: {}", path.display(), e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use util::test_helpers::write_file;

    const EXERCISE: &str = r#"{
        "id": "doelgroep",
        "title": "Doelgroep",
        "evaluation_criteria": ["Noemt de doelgroep"],
        "reference_solution": "Leg uit voor de doelgroep: leerlingen."
    }"#;

    #[test]
    fn loads_single_exercise() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(tmp.path(), "doelgroep.json", EXERCISE);
        let ex = load_exercise(&path).unwrap();
        assert_eq!(ex.id, "doelgroep");
        assert_eq!(ex.criteria, vec!["Noemt de doelgroep".to_string()]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        match load_exercise(&tmp.path().join("nope.json")) {
            Err(EvaluatorError::IoError(msg)) => assert_eq!(msg, "File not found"),
            other => panic!("Expected IoError, got: {:?}", other),
        }
    }

    #[test]
    fn directory_is_not_a_file() {
        let tmp = TempDir::new().unwrap();
        match load_exercise(tmp.path()) {
            Err(EvaluatorError::IoError(msg)) => assert_eq!(msg, "Invalid file type"),
            other => panic!("Expected IoError, got: {:?}", other),
        }
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let big = format!("{{\"id\": \"x\", \"title\": \"{}\"}}", "a".repeat(3 * 1024 * 1024));
        let path = write_file(tmp.path(), "big.json", &big);
        match load_exercise(&path) {
            Err(EvaluatorError::IoError(msg)) => assert_eq!(msg, "File too large"),
            other => panic!("Expected IoError, got: {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(tmp.path(), "bad.json", "{ not json");
        assert!(matches!(load_exercise(&path), Err(EvaluatorError::InvalidJson(_))));
    }

    #[test]
    fn directory_loads_sorted_and_skips_other_files() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "b.json", &EXERCISE.replace(r#""id": "doelgroep""#, r#""id": "b""#));
        write_file(tmp.path(), "a.json", &EXERCISE.replace(r#""id": "doelgroep""#, r#""id": "a""#));
        write_file(tmp.path(), "notes.txt", "not an exercise");
        let ids: Vec<String> = load_exercises_dir(tmp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "one.json", EXERCISE);
        write_file(tmp.path(), "two.json", EXERCISE);
        assert_eq!(
            load_exercises_dir(tmp.path()),
            Err(EvaluatorError::DuplicateExercise("doelgroep".to_string()))
        );
    }

    #[test]
    fn loads_taxonomy_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            tmp.path(),
            "taxonomy.json",
            r#"{"concepts": [{"name": "klimaat", "keywords": ["Klimaat", "opwarming"]}]}"#,
        );
        let taxonomy = load_taxonomy(&path).unwrap();
        assert_eq!(taxonomy.len(), 1);
        assert!(taxonomy.get("klimaat").is_some());
    }

    #[test]
    fn concept_without_keywords_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            tmp.path(),
            "taxonomy.json",
            r#"{"concepts": [{"name": "leeg", "keywords": ["  "]}]}"#,
        );
        assert!(matches!(load_taxonomy(&path), Err(EvaluatorError::InvalidTaxonomy(_))));
    }
}
