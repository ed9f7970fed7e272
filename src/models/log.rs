use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the history log.
///
/// The log is append-only. Nothing deduplicates by name or date, so the same
/// identity can have several entries on one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub name: String,
    pub date: NaiveDate,
    /// Monthly footprint in kg CO2.
    pub total_co2: f64,
    /// Goal in effect when the entry was recorded.
    pub goal: f64,
}

/// Latest entry per identity, lowest footprint first, plus the class mean.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassSummary {
    pub latest: Vec<LogEntry>,
    /// Mean of the latest totals rounded to one decimal; `None` for an empty log.
    pub average: Option<f64>,
}

impl ClassSummary {
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}

/// An identity's footprint over time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Progress {
    /// Fewer than two entries exist, so there is no trend to show.
    Insufficient { count: usize },
    /// Entries ordered by date, with the goal line to compare against.
    Series { entries: Vec<LogEntry>, goal: f64 },
}
