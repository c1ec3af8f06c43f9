//! File system repository

use crate::error::{Result, StudyLogError};
use crate::infrastructure::{Config, SlotStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for study-log setup operations
pub trait StudyLogRepository {
    /// Load configuration from .studylog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .studylog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .studylog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .studylog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of StudyLogRepository and SlotStorage
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the log root by walking up from current directory.
    /// First checks STUDYLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("STUDYLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_studylog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(StudyLogError::Config(format!(
                    "STUDYLOG_ROOT is set to '{}' but no .studylog directory found. \
                    Run 'studylog init' in that directory or unset STUDYLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the log root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_studylog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(StudyLogError::NotStudyLogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .studylog directory
    fn has_studylog_dir(path: &Path) -> bool {
        path.join(".studylog").is_dir()
    }

    fn slots_dir(&self) -> PathBuf {
        self.root.join(".studylog").join("slots")
    }

    /// Path of the file backing a slot
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.slots_dir().join(format!("{}.json", key))
    }
}

impl StudyLogRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_studylog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(StudyLogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.slots_dir())?;
        Ok(())
    }
}

impl SlotStorage for FileSystemRepository {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Config::validate_storage_key(key)?;
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StudyLogError::Io(e)),
        }
    }

    /// Best-effort atomic replace: write a temp file beside the slot, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        Config::validate_storage_key(key)?;
        let path = self.slot_path(key);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_file_name(format!("{}.json.tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".studylog/slots").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".studylog")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_studylog() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            StudyLogError::NotStudyLogDirectory(_) => {}
            other => panic!("Expected NotStudyLogDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_uses_env_root() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("STUDYLOG_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".studylog")).unwrap();
        std::env::set_var("STUDYLOG_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_env_root_without_studylog_fails() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("STUDYLOG_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("STUDYLOG_ROOT", temp.path());

        match FileSystemRepository::discover().unwrap_err() {
            StudyLogError::Config(msg) => assert!(msg.contains("STUDYLOG_ROOT")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let config = Config::new();
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.storage_key, config.storage_key);
    }

    #[test]
    fn test_missing_slot_reads_none() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert_eq!(repo.get_item("daily-study-entries-v2").unwrap(), None);
    }

    #[test]
    fn test_slot_write_then_read() {
        let temp = TempDir::new().unwrap();
        let mut repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.set_item("entries", "[]").unwrap();
        repo.set_item("entries", "[1]").unwrap();

        assert_eq!(repo.get_item("entries").unwrap().as_deref(), Some("[1]"));
        assert!(temp.path().join(".studylog/slots/entries.json").is_file());

        let leftovers: Vec<_> = fs::read_dir(temp.path().join(".studylog/slots"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_slot_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let mut repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(repo.set_item("../outside", "[]").is_err());
        assert!(repo.get_item("a/b").is_err());
    }
}
