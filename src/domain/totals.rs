//! Aggregated totals across the collection

use crate::domain::entry::coerce_amount;
use crate::domain::Entry;

/// Per-subject sums
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub physics: f64,
    pub chemistry: f64,
    pub maths: f64,
    pub mocks: u64,
}

/// Sum every counter across `entries`.
pub fn aggregate_totals(entries: &[Entry]) -> Totals {
    entries.iter().fold(Totals::default(), |mut acc, entry| {
        acc.physics += coerce_amount(entry.physics);
        acc.chemistry += coerce_amount(entry.chemistry);
        acc.maths += coerce_amount(entry.maths);
        acc.mocks += u64::from(entry.mocks);
        acc
    })
}
