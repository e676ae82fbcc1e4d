use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DENYLIST_FILE_ENV: &str = "DENYLIST_FILE";
pub const EXCEPTIONS_FILE_ENV: &str = "EXCEPTIONS_FILE";

pub const DEFAULT_DENYLIST_FILE: &str = "policy/licenses-denylist.txt";
pub const DEFAULT_EXCEPTIONS_FILE: &str = ".compliance/exceptions.json";
pub const DEFAULT_OUTPUT_FILE: &str = "forbidden-licenses.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Newline-delimited list of denied license identifiers (required)
    pub denylist_file: PathBuf,

    /// JSON document with time-boxed per-package exceptions (optional)
    pub exceptions_file: PathBuf,

    /// Where findings are written when any exist
    pub output_file: PathBuf,

    /// Directory SBOM discovery starts from
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            denylist_file: PathBuf::from(DEFAULT_DENYLIST_FILE),
            exceptions_file: PathBuf::from(DEFAULT_EXCEPTIONS_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Apply overrides from a variable lookup. Empty values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(DENYLIST_FILE_ENV) {
            self.denylist_file = PathBuf::from(path);
        }
        if let Some(path) = non_empty(EXCEPTIONS_FILE_ENV) {
            self.exceptions_file = PathBuf::from(path);
        }
        self
    }
}

/// Load configuration from defaults and the process environment
pub fn load_config() -> Config {
    Config::default().with_env(|key| std::env::var(key).ok())
}
