//! Export and import use cases

use crate::application::entry_store::{EntryStore, Presenter};
use crate::error::{Result, StudyLogError};
use crate::infrastructure::SlotStorage;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write the pretty-printed collection to `path`. Returns the number of entries written.
pub fn export_to_file<S: SlotStorage, P: Presenter>(
    store: &EntryStore<S, P>,
    path: &Path,
) -> Result<usize> {
    let count = store.load().len();
    let text = store.export_text()?;
    fs::write(path, text)?;
    info!(path = %path.display(), count, "exported entries");
    Ok(count)
}

/// Replace the collection with the contents of `path`.
/// Read and format failures both surface as import errors; the store is untouched on failure.
pub fn import_from_file<S: SlotStorage, P: Presenter>(
    store: &mut EntryStore<S, P>,
    path: &Path,
) -> Result<usize> {
    let text = fs::read_to_string(path)
        .map_err(|e| StudyLogError::ImportFormat(format!("{}: {}", path.display(), e)))?;
    let count = store.import_text(&text)?;
    info!(path = %path.display(), count, "imported entries");
    Ok(count)
}
