//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};
use tracing::warn;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    /// Optional JSON file replacing the built-in concept taxonomy.
    pub taxonomy_path: Option<String>,
    /// Optional directory with additional exercise JSON files.
    pub content_dir: Option<String>,
    /// Default pass mark (0-100) for criteria.
    pub pass_mark: u32,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn pass_mark_from_env() -> u32 {
    let Ok(raw) = env::var("PASS_MARK") else {
        return 60;
    };
    match raw.trim().parse::<u32>() {
        Ok(v) if v <= 100 => v,
        _ => {
            warn!("Ignoring invalid PASS_MARK '{}', using 60", raw);
            60
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every key is optional. Malformed numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "exercise-evaluator".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "evaluator.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            taxonomy_path: non_empty_var("TAXONOMY_PATH"),
            content_dir: non_empty_var("CONTENT_DIR"),
            pass_mark: pass_mark_from_env(),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_taxonomy_path(value: Option<String>) {
        AppConfig::set_field(|cfg| cfg.taxonomy_path = value);
    }

    pub fn set_content_dir(value: Option<String>) {
        AppConfig::set_field(|cfg| cfg.content_dir = value);
    }

    pub fn set_pass_mark(value: u32) {
        AppConfig::set_field(|cfg| cfg.pass_mark = value.min(100));
    }
}

pub fn app_env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn taxonomy_path() -> Option<String> {
    AppConfig::global().taxonomy_path.clone()
}

pub fn content_dir() -> Option<String> {
    AppConfig::global().content_dir.clone()
}

pub fn pass_mark() -> u32 {
    AppConfig::global().pass_mark
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &["PASS_MARK", "TAXONOMY_PATH", "CONTENT_DIR", "LOG_TO_STDOUT"];

    fn clear_vars() {
        for k in VARS {
            unsafe { env::remove_var(k) };
        }
    }

    #[test]
    #[serial]
    fn defaults_when_env_is_empty() {
        clear_vars();
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.pass_mark, 60);
        assert!(cfg.taxonomy_path.is_none());
        assert!(cfg.content_dir.is_none());
        assert!(!cfg.log_to_stdout);
    }

    #[test]
    #[serial]
    fn reads_overrides_from_env() {
        clear_vars();
        unsafe {
            env::set_var("PASS_MARK", "75");
            env::set_var("TAXONOMY_PATH", "taxonomy/nl.json");
            env::set_var("LOG_TO_STDOUT", "true");
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.pass_mark, 75);
        assert_eq!(cfg.taxonomy_path.as_deref(), Some("taxonomy/nl.json"));
        assert!(cfg.log_to_stdout);
        clear_vars();
    }

    #[test]
    #[serial]
    fn rejects_out_of_range_pass_mark() {
        clear_vars();
        unsafe { env::set_var("PASS_MARK", "250") };
        assert_eq!(AppConfig::from_env().pass_mark, 60);
        unsafe { env::set_var("PASS_MARK", "abc") };
        assert_eq!(AppConfig::from_env().pass_mark, 60);
        clear_vars();
    }

    #[test]
    #[serial]
    fn blank_paths_are_treated_as_unset() {
        clear_vars();
        unsafe { env::set_var("CONTENT_DIR", "   ") };
        assert!(AppConfig::from_env().content_dir.is_none());
        clear_vars();
    }

    #[test]
    #[serial]
    fn setters_override_global_values() {
        clear_vars();
        AppConfig::reset();
        AppConfig::set_pass_mark(80);
        assert_eq!(pass_mark(), 80);
        AppConfig::set_pass_mark(500);
        assert_eq!(pass_mark(), 100);
        AppConfig::reset();
        assert_eq!(pass_mark(), 60);
    }
}
