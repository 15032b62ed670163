use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::AppConfig;

/// Creates a unique temporary directory and points `CONTENT_DIR` at it for the
/// duration of the test. The directory is removed when the returned `TempDir`
/// is dropped.
///
/// Callers that touch the environment should run under `#[serial]`.
pub fn setup_test_content_dir() -> TempDir {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let abs = tmp
        .path()
        .canonicalize()
        .unwrap_or_else(|_| tmp.path().to_path_buf());
    unsafe {
        env::set_var("CONTENT_DIR", &abs);
    }
    AppConfig::set_content_dir(Some(abs.to_string_lossy().into_owned()));
    tmp
}

/// Writes `contents` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    fs::write(&path, contents).expect("failed to write test file");
    path
}
