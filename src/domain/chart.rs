//! Line-chart series extraction

use crate::domain::entry::coerce_amount;
use crate::domain::Entry;

/// Date labels plus one series per charted subject, in collection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub physics: Vec<f64>,
    pub chemistry: Vec<f64>,
    pub maths: Vec<f64>,
}

impl ChartSeries {
    pub fn from_entries(entries: &[Entry]) -> Self {
        ChartSeries {
            labels: entries.iter().map(|e| e.date.clone()).collect(),
            physics: entries.iter().map(|e| coerce_amount(e.physics)).collect(),
            chemistry: entries.iter().map(|e| coerce_amount(e.chemistry)).collect(),
            maths: entries.iter().map(|e| coerce_amount(e.maths)).collect(),
        }
    }

    /// Named series in display order
    pub fn series(&self) -> [(&'static str, &[f64]); 3] {
        [
            ("Physics", self.physics.as_slice()),
            ("Chemistry", self.chemistry.as_slice()),
            ("Maths", self.maths.as_slice()),
        ]
    }

    /// Largest value across all series, 0 when empty
    pub fn max_value(&self) -> f64 {
        self.series()
            .into_iter()
            .flat_map(|(_, values)| values.iter().copied())
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
