//! Application layer - Use cases and orchestration

pub mod entry_store;
pub mod init;
pub mod manage_config;
pub mod record;
pub mod transfer;

pub use entry_store::{EntryStore, Presenter, SilentPresenter};
pub use manage_config::ConfigService;
pub use record::{add_entry, edit_entry, FormOverrides};
pub use transfer::{export_to_file, import_from_file};
