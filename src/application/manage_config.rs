//! Config management use case

use crate::error::{Result, StudyLogError};
use crate::infrastructure::{Config, FileSystemRepository, StudyLogRepository};

/// Service for managing study log configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key),
            "export_file" => Ok(config.export_file),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(StudyLogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: storage_key, export_file, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "storage_key" => {
                Config::validate_storage_key(value)?;
                config.storage_key = value.to_string();
            }
            "export_file" => {
                if value.trim().is_empty() {
                    return Err(StudyLogError::Config(
                        "export_file cannot be empty".to_string(),
                    ));
                }
                config.export_file = value.to_string();
            }
            "created" => {
                return Err(StudyLogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(StudyLogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: storage_key, export_file",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
