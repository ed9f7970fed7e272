//! CSV-backed history log.
//!
//! The log is rewritten in full on every append: read all rows, push the new
//! one, write everything back. There is no locking, so two processes
//! appending at once can lose an entry.

mod export;
pub mod schema;

pub use export::*;

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

use crate::error::{FootprintError, Result};
use crate::models::LogEntry;

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "footprint_log.csv";

pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in log order. A missing or empty file is an empty history.
    pub fn load(&self) -> Result<Vec<LogEntry>> {
        if !self.path.exists() || std::fs::metadata(&self.path)?.len() == 0 {
            tracing::debug!("No history at {}", self.path.display());
            return Ok(Vec::new());
        }

        let df = read_csv_as_strings(&self.path)?;
        let entries = entries_from_frame(&df)?;
        tracing::debug!("Loaded {} entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    /// Append `entry` to the log, creating the file if needed.
    pub fn append(&self, entry: LogEntry) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.write_all(&entries)?;
        tracing::info!(
            "Appended entry to {} ({} total)",
            self.path.display(),
            entries.len()
        );
        Ok(())
    }

    fn write_all(&self, entries: &[LogEntry]) -> Result<()> {
        write_entries(&self.path, entries)
    }
}

/// Write `entries` as a `Name,Date,Total_CO2,Goal` CSV file, replacing `path`.
pub(crate) fn write_entries(path: &Path, entries: &[LogEntry]) -> Result<()> {
    let mut df = entries_to_frame(entries)?;
    write_csv(path, &mut df)
}

pub(crate) fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}

fn read_csv_as_strings(path: &Path) -> Result<DataFrame> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // all columns as String
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let trimmed: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    df.set_column_names(trimmed.as_slice())?;

    Ok(df)
}

fn entries_to_frame(entries: &[LogEntry]) -> Result<DataFrame> {
    let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
    let dates: Vec<String> = entries
        .iter()
        .map(|e| e.date.format(schema::DATE_FORMAT).to_string())
        .collect();
    let totals: Vec<f64> = entries.iter().map(|e| e.total_co2).collect();
    let goals: Vec<f64> = entries.iter().map(|e| e.goal).collect();

    let df = DataFrame::new(vec![
        Column::new(schema::log::NAME.into(), &names),
        Column::new(schema::log::DATE.into(), &dates),
        Column::new(schema::log::TOTAL_CO2.into(), &totals),
        Column::new(schema::log::GOAL.into(), &goals),
    ])?;
    Ok(df)
}

fn entries_from_frame(df: &DataFrame) -> Result<Vec<LogEntry>> {
    let names = df.column(schema::log::NAME)?.str()?;
    let dates = df.column(schema::log::DATE)?.str()?;
    let totals = df.column(schema::log::TOTAL_CO2)?.str()?;
    let goals = df.column(schema::log::GOAL)?.str()?;

    let mut entries = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        // Row numbers in errors count the header as row 1.
        let row = i + 2;
        let date_text = dates.get(i).ok_or_else(|| missing(row, schema::log::DATE))?;
        let total_text = totals
            .get(i)
            .ok_or_else(|| missing(row, schema::log::TOTAL_CO2))?;
        let goal_text = goals.get(i).ok_or_else(|| missing(row, schema::log::GOAL))?;

        entries.push(LogEntry {
            name: names.get(i).unwrap_or_default().to_string(),
            date: parse_date(date_text, row)?,
            total_co2: parse_number(total_text, schema::log::TOTAL_CO2, row)?,
            goal: parse_number(goal_text, schema::log::GOAL, row)?,
        });
    }
    Ok(entries)
}

fn missing(row: usize, column: &str) -> FootprintError {
    FootprintError::InvalidData {
        row,
        message: format!("missing {}", column),
    }
}

fn parse_number(text: &str, column: &str, row: usize) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| FootprintError::InvalidData {
            row,
            message: format!("{} is not a number: '{}'", column, text),
        })
}

/// Accepts `YYYY-MM-DD`, or a `YYYY-MM-DD HH:MM:SS` timestamp truncated to its date.
fn parse_date(text: &str, row: usize) -> Result<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, schema::DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .map_err(|_| FootprintError::InvalidData {
            row,
            message: format!("{} is not an ISO date: '{}'", schema::log::DATE, text),
        })
}
