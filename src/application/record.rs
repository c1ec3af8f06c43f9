//! Record and edit entries through the form model

use crate::application::entry_store::{EntryStore, Presenter};
use crate::domain::entry::validate_date;
use crate::domain::{Entry, EntryForm};
use crate::error::{Result, StudyLogError};
use crate::infrastructure::SlotStorage;
use chrono::NaiveDate;

/// Field values supplied on the command line; `None` keeps the form's value
#[derive(Debug, Clone, Default)]
pub struct FormOverrides {
    pub date: Option<String>,
    pub physics: Option<String>,
    pub chemistry: Option<String>,
    pub maths: Option<String>,
    pub mocks: Option<String>,
}

impl FormOverrides {
    pub fn apply(self, form: &mut EntryForm) {
        if let Some(date) = self.date {
            form.date = date;
        }
        if let Some(v) = self.physics {
            form.physics = v;
        }
        if let Some(v) = self.chemistry {
            form.chemistry = v;
        }
        if let Some(v) = self.maths {
            form.maths = v;
        }
        if let Some(v) = self.mocks {
            form.mocks = v;
        }
    }
}

/// Fill a blank form (dated `today`), submit it and upsert the result.
pub fn add_entry<S: SlotStorage, P: Presenter>(
    store: &mut EntryStore<S, P>,
    today: NaiveDate,
    overrides: FormOverrides,
) -> Result<Entry> {
    let mut form = EntryForm::blank(today);
    overrides.apply(&mut form);
    let entry = form.submit()?;
    store.upsert(entry.clone())?;
    Ok(entry)
}

/// Start from the stored entry for `date`, apply overrides and upsert.
/// Changing the date through overrides records under the new date and leaves the old one.
pub fn edit_entry<S: SlotStorage, P: Presenter>(
    store: &mut EntryStore<S, P>,
    date: &str,
    overrides: FormOverrides,
) -> Result<Entry> {
    let date = validate_date(date)?;
    let existing = store
        .find(&date)
        .ok_or_else(|| StudyLogError::EntryNotFound(date.clone()))?;

    let mut form = EntryForm::from_entry(&existing);
    overrides.apply(&mut form);
    let entry = form.submit()?;
    store.upsert(entry.clone())?;
    Ok(entry)
}
