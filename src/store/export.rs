use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use polars::prelude::*;

use super::schema;
use crate::error::Result;
use crate::models::{ClassSummary, FootprintBreakdown};

/// File name for a personal breakdown export, e.g.
/// `carbon_footprint_Maya_2026-10-15.csv`.
///
/// The name is reduced to a single path component: anything other than
/// letters, digits, spaces, `-`, `_` and `.` becomes `_`.
pub fn breakdown_file_name(name: &str, date: NaiveDate) -> String {
    format!(
        "carbon_footprint_{}_{}.csv",
        file_safe(name),
        date.format(schema::DATE_FORMAT)
    )
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File name for a class table export, e.g. `class_footprint_log_2026-10-15.csv`.
pub fn class_file_name(date: NaiveDate) -> String {
    format!("class_footprint_log_{}.csv", date.format(schema::DATE_FORMAT))
}

/// Write the breakdown as `Category,CO2_kg,Percent,Name,Goal` rows into `dir`.
///
/// Returns the path of the written file.
pub fn export_breakdown(
    dir: &Path,
    breakdown: &FootprintBreakdown,
    name: &str,
    goal: f64,
    date: NaiveDate,
) -> Result<PathBuf> {
    let rows = breakdown.categories.len();
    let categories: Vec<String> = breakdown
        .categories
        .iter()
        .map(|c| c.category.label().to_string())
        .collect();
    let co2: Vec<f64> = breakdown.categories.iter().map(|c| c.co2_kg).collect();
    let percent: Vec<f64> = breakdown.categories.iter().map(|c| c.percent).collect();
    let names: Vec<String> = vec![name.to_string(); rows];
    let goals: Vec<f64> = vec![goal; rows];

    let mut df = DataFrame::new(vec![
        Column::new(schema::breakdown::CATEGORY.into(), &categories),
        Column::new(schema::breakdown::CO2_KG.into(), &co2),
        Column::new(schema::breakdown::PERCENT.into(), &percent),
        Column::new(schema::breakdown::NAME.into(), &names),
        Column::new(schema::breakdown::GOAL.into(), &goals),
    ])?;

    let path = dir.join(breakdown_file_name(name, date));
    super::write_csv(&path, &mut df)?;
    tracing::info!("Exported breakdown to {}", path.display());
    Ok(path)
}

/// Write the latest-per-identity table in log format into `dir`.
pub fn export_class(dir: &Path, summary: &ClassSummary, date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(class_file_name(date));
    super::write_entries(&path, &summary.latest)?;
    tracing::info!(
        "Exported {} class rows to {}",
        summary.latest.len(),
        path.display()
    );
    Ok(path)
}
