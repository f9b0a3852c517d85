// Tabular and JSON reporting of a route comparison

use serde::Serialize;
use std::error::Error;
use std::fs;

use crate::models::RouteComparison;

/// Flat summary of a comparison, suitable for export
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Distance of the in-order reference route
    pub baseline_distance: u64,

    /// Distance of the nearest-neighbor route
    pub optimized_distance: u64,

    /// Improvement of optimized over baseline, 0.0 for a zero baseline
    pub improvement_percent: f64,
}

impl From<&RouteComparison> for ComparisonReport {
    fn from(comparison: &RouteComparison) -> Self {
        Self {
            baseline_distance: comparison.baseline.total_distance,
            optimized_distance: comparison.optimized.total_distance,
            improvement_percent: comparison.improvement_percent(),
        }
    }
}

/// Renders the comparison as a plain-text results table
pub fn render_table(comparison: &RouteComparison) -> String {
    let report = ComparisonReport::from(comparison);

    let mut table = String::new();
    table.push_str(&format!("{:<18}{}\n", "Metric", "Distance (units)"));
    table.push_str(&format!(
        "{:<18}{}\n",
        "Baseline Route", report.baseline_distance
    ));
    table.push_str(&format!(
        "{:<18}{}\n",
        "Optimized Route", report.optimized_distance
    ));
    table.push_str(&format!(
        "{:<18}{:.2}%\n",
        "Improvement", report.improvement_percent
    ));
    table
}

/// Writes the comparison summary to a JSON file
pub fn write_json(comparison: &RouteComparison, path: &str) -> Result<(), Box<dyn Error>> {
    let report = ComparisonReport::from(comparison);
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json)?;
    Ok(())
}
