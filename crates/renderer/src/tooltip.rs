//! Tooltip content for heatmap cells.

use heatmap_common::{Dataset, MonthlyVariance};

/// What the tooltip shows for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub year: i32,
    pub month: &'static str,
    pub temperature: f64,
    pub variance: f64,
}

impl Tooltip {
    pub fn for_record(dataset: &Dataset, record: &MonthlyVariance) -> Self {
        Self {
            year: record.year,
            month: record.month_name().unwrap_or_default(),
            temperature: dataset.temperature(record),
            variance: record.variance,
        }
    }

    /// Display lines, temperatures rounded to two decimals.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("{} - {}", self.year, self.month),
            format!("Temp: {:.2}℃", self.temperature),
            format!("Variance: {:.2}℃", self.variance),
        ]
    }

    /// Lines joined with `<br>` for the page tooltip element.
    pub fn to_html(&self) -> String {
        self.lines().join("<br>")
    }

    /// Lines joined with newlines for a native SVG `<title>`.
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}
