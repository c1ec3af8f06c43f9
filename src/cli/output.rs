//! Output formatting utilities

use crate::application::Presenter;
use crate::domain::{aggregate_totals, ChartSeries, Entry, Totals};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One-line totals summary
pub fn format_totals(totals: &Totals) -> String {
    format!(
        "Physics: {}  |  Chemistry: {}  |  Maths: {}  |  Mocks: {}",
        totals.physics, totals.chemistry, totals.maths, totals.mocks
    )
}

/// Entries newest first
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries yet\n".to_string();
    }

    let mut output = String::new();
    for entry in entries.iter().rev() {
        output.push_str(&format!("{}  ({} mocks)\n", entry.date, entry.mocks));
        output.push_str(&format!(
            "    Phy {} • Chem {} • Math {}\n",
            entry.physics, entry.chemistry, entry.maths
        ));
    }
    output
}

/// Sparkline per subject, all scaled to the same maximum
pub fn format_chart(chart: &ChartSeries) -> String {
    if chart.is_empty() {
        return String::new();
    }

    let max = chart.max_value();
    let mut output = String::new();
    for (label, values) in chart.series() {
        let line: String = values.iter().map(|v| spark(*v, max)).collect();
        output.push_str(&format!("{:<10} {}\n", label, line));
    }

    let first = &chart.labels[0];
    let last = &chart.labels[chart.labels.len() - 1];
    if first == last {
        output.push_str(&format!("{:<10} {}\n", "", first));
    } else {
        output.push_str(&format!("{:<10} {} → {}\n", "", first, last));
    }
    output
}

fn spark(value: f64, max: f64) -> char {
    if max <= 0.0 {
        return SPARK_LEVELS[0];
    }
    let top = (SPARK_LEVELS.len() - 1) as f64;
    let idx = ((value / max) * top).round().clamp(0.0, top) as usize;
    SPARK_LEVELS[idx]
}

/// Totals, entry list and chart together
pub fn format_dashboard(entries: &[Entry]) -> String {
    let mut output = format_totals(&aggregate_totals(entries));
    output.push_str("\n\n");
    output.push_str(&format_entry_list(entries));

    let chart = format_chart(&ChartSeries::from_entries(entries));
    if !chart.is_empty() {
        output.push('\n');
        output.push_str(&chart);
    }
    output
}

/// Prints the dashboard to stdout after every change
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render(&mut self, entries: &[Entry]) {
        print!("{}", format_dashboard(entries));
    }
}
