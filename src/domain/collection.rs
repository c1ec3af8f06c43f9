//! Pure operations over the entry collection

use crate::domain::Entry;

/// Sort ascending by date string. Stable, so duplicate dates keep input order.
pub fn sort_by_date(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Replace any entry sharing `entry.date`, then re-sort.
pub fn upsert(mut entries: Vec<Entry>, entry: Entry) -> Vec<Entry> {
    entries.retain(|existing| existing.date != entry.date);
    entries.push(entry);
    sort_by_date(&mut entries);
    entries
}

/// Drop every entry for `date`. Returns the remaining entries and whether anything was removed.
pub fn remove_by_date(mut entries: Vec<Entry>, date: &str) -> (Vec<Entry>, bool) {
    let before = entries.len();
    entries.retain(|existing| existing.date != date);
    let removed = entries.len() != before;
    (entries, removed)
}

/// Sort a wholesale replacement. Duplicate dates are kept.
pub fn replace_all(mut entries: Vec<Entry>) -> Vec<Entry> {
    sort_by_date(&mut entries);
    entries
}

pub fn find<'a>(entries: &'a [Entry], date: &str) -> Option<&'a Entry> {
    entries.iter().find(|entry| entry.date == date)
}
