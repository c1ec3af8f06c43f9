//! Configuration management

use crate::error::{Result, StudyLogError};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Slot key the browser tool used; kept so exported data lines up.
pub const DEFAULT_STORAGE_KEY: &str = "daily-study-entries-v2";
pub const DEFAULT_EXPORT_FILE: &str = "study-entries.json";

fn storage_key_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    pub created: DateTime<Utc>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            storage_key: default_storage_key(),
            export_file: default_export_file(),
            created: Utc::now(),
        }
    }

    /// Load config from .studylog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".studylog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StudyLogError::NotStudyLogDirectory(path.to_path_buf())
            } else {
                StudyLogError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| StudyLogError::Config(format!("Failed to parse config.toml: {}", e)))?;
        Self::validate_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to .studylog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let studylog_dir = path.join(".studylog");
        let config_path = studylog_dir.join("config.toml");

        if !studylog_dir.exists() {
            fs::create_dir(&studylog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| StudyLogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Storage keys become file names, so only a safe character set is allowed
    pub fn validate_storage_key(key: &str) -> Result<()> {
        if storage_key_regex().is_match(key) && key != "." && key != ".." {
            Ok(())
        } else {
            Err(StudyLogError::Config(format!(
                "Invalid storage_key: '{}'",
                key
            )))
        }
    }
}
