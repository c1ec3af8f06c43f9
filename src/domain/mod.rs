//! Domain layer - Entry model and pure collection logic

pub mod chart;
pub mod collection;
pub mod entry;
pub mod exchange;
pub mod form;
pub mod totals;

pub use chart::ChartSeries;
pub use entry::Entry;
pub use form::EntryForm;
pub use totals::{aggregate_totals, Totals};
