use crate::config;
use std::{fs, io, path::{Path, PathBuf}};

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Ensure the parent directory of a *file path* exists (no-op if none).
pub fn ensure_parent_dir<P: AsRef<Path>>(file_path: P) -> io::Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Resolve `raw` against the current directory when it is relative.
pub fn resolve<P: AsRef<Path>>(raw: P) -> PathBuf {
    let p = raw.as_ref();
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Taxonomy override file from `TAXONOMY_PATH`, if configured.
pub fn taxonomy_path() -> Option<PathBuf> {
    config::taxonomy_path().map(resolve)
}

/// Extra exercise directory from `CONTENT_DIR`, if configured.
pub fn content_dir() -> Option<PathBuf> {
    config::content_dir().map(resolve)
}

/// Directory the rolling log files are written to.
pub fn log_dir() -> PathBuf {
    resolve("logs")
}
