//! Entry store: read-modify-write-render over one storage slot
//!
//! Nothing is cached between calls. Every operation loads the collection
//! from the slot, applies a pure change from `domain::collection`, writes
//! the whole collection back, and re-renders through the presenter.

use crate::domain::{aggregate_totals, collection, exchange, Entry, Totals};
use crate::error::Result;
use crate::infrastructure::{Confirmation, SlotStorage};
use tracing::{debug, warn};

/// Presentation surface, re-rendered after every mutation
pub trait Presenter {
    fn render(&mut self, entries: &[Entry]);
}

/// Presenter that draws nothing
#[derive(Debug, Default)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn render(&mut self, _entries: &[Entry]) {}
}

pub struct EntryStore<S: SlotStorage, P: Presenter> {
    storage: S,
    key: String,
    presenter: P,
}

impl<S: SlotStorage, P: Presenter> EntryStore<S, P> {
    pub fn new(storage: S, key: impl Into<String>, presenter: P) -> Self {
        EntryStore {
            storage,
            key: key.into(),
            presenter,
        }
    }

    /// Persisted collection, or empty when the slot is missing or unreadable
    pub fn load(&self) -> Vec<Entry> {
        match self.read() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key = %self.key, error = %e, "treating stored entries as empty");
                Vec::new()
            }
        }
    }

    fn read(&self) -> Result<Vec<Entry>> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => exchange::parse_stored(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let payload = exchange::to_stored(entries)?;
        self.storage.set_item(&self.key, &payload)?;
        debug!(key = %self.key, count = entries.len(), "saved entries");
        self.render();
        Ok(())
    }

    /// Insert or replace the entry for `entry.date`
    pub fn upsert(&mut self, entry: Entry) -> Result<()> {
        let entries = collection::upsert(self.load(), entry);
        self.save(&entries)
    }

    /// Remove the entry for `date`. Returns false, and still re-saves, when there was none.
    pub fn remove_by_date(&mut self, date: &str) -> Result<bool> {
        let (entries, removed) = collection::remove_by_date(self.load(), date);
        self.save(&entries)?;
        Ok(removed)
    }

    /// Replace the whole collection. Duplicate dates in `entries` are kept.
    pub fn replace_all(&mut self, entries: Vec<Entry>) -> Result<()> {
        let entries = collection::replace_all(entries);
        self.save(&entries)
    }

    /// Parse import text and replace the collection with it.
    /// On a format error the stored collection is left untouched.
    pub fn import_text(&mut self, text: &str) -> Result<usize> {
        let entries = exchange::parse_import(text)?;
        let count = entries.len();
        self.replace_all(entries)?;
        Ok(count)
    }

    /// Empty the collection once the user agrees. Returns whether it was cleared.
    pub fn clear_all(&mut self, confirmation: &mut dyn Confirmation) -> Result<bool> {
        if !confirmation.confirm("Delete all saved entries?")? {
            return Ok(false);
        }
        self.save(&[])?;
        Ok(true)
    }

    pub fn find(&self, date: &str) -> Option<Entry> {
        collection::find(&self.load(), date).cloned()
    }

    pub fn totals(&self) -> Totals {
        aggregate_totals(&self.load())
    }

    /// Pretty-printed collection for export files
    pub fn export_text(&self) -> Result<String> {
        exchange::to_export(&self.load())
    }

    /// Render the current collection without changing it
    pub fn render(&mut self) {
        let entries = self.load();
        self.presenter.render(&entries);
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub(crate) fn presenter(&self) -> &P {
        &self.presenter
    }
}
