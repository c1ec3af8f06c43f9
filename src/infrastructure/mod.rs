//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod prompt;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use prompt::{Confirmation, Preapproved, TerminalConfirmation};
pub use repository::{FileSystemRepository, StudyLogRepository};
pub use storage::{MemoryStorage, SlotStorage};
