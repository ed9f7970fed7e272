//! Views over the history log: one identity's progress and the class table.

use std::collections::HashMap;

use crate::calculator::round_to;
use crate::models::{ClassSummary, LogEntry, Progress};

/// Minimum number of entries needed to show a trend.
pub const MIN_SERIES_LEN: usize = 2;

/// Entries recorded for `name`, ordered by date.
///
/// Entries on the same date keep their log order. Fewer than
/// [`MIN_SERIES_LEN`] matches is reported as [`Progress::Insufficient`].
pub fn progress(entries: &[LogEntry], name: &str, goal: f64) -> Progress {
    let mut series: Vec<LogEntry> = entries.iter().filter(|e| e.name == name).cloned().collect();

    if series.len() < MIN_SERIES_LEN {
        return Progress::Insufficient {
            count: series.len(),
        };
    }

    series.sort_by_key(|e| e.date);
    Progress::Series {
        entries: series,
        goal,
    }
}

/// The chronologically last entry of every identity, lowest total first,
/// together with the mean of those totals.
///
/// When an identity has several entries on its latest date, the one written
/// last to the log wins. An empty log gives an empty summary.
pub fn class_summary(entries: &[LogEntry]) -> ClassSummary {
    let mut latest: HashMap<&str, &LogEntry> = HashMap::new();
    for entry in entries {
        match latest.get(entry.name.as_str()) {
            Some(current) if current.date > entry.date => {}
            _ => {
                latest.insert(entry.name.as_str(), entry);
            }
        }
    }

    let mut latest: Vec<LogEntry> = latest.into_values().cloned().collect();
    latest.sort_by(|a, b| {
        a.total_co2
            .total_cmp(&b.total_co2)
            .then_with(|| a.name.cmp(&b.name))
    });

    let average = if latest.is_empty() {
        None
    } else {
        let sum: f64 = latest.iter().map(|e| e.total_co2).sum();
        Some(round_to(sum / latest.len() as f64, 1))
    };

    ClassSummary { latest, average }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(name: &str, day: u32, total: f64) -> LogEntry {
        LogEntry {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            total_co2: total,
            goal: 900.0,
        }
    }

    #[test]
    fn test_same_day_tie_prefers_later_log_row() {
        let entries = vec![entry("A", 5, 300.0), entry("A", 5, 250.0)];
        let summary = class_summary(&entries);
        assert_eq!(summary.latest.len(), 1);
        assert_eq!(summary.latest[0].total_co2, 250.0);
    }

    #[test]
    fn test_out_of_order_log_uses_date_not_position() {
        let entries = vec![entry("A", 9, 400.0), entry("A", 2, 100.0)];
        let summary = class_summary(&entries);
        assert_eq!(summary.latest[0].total_co2, 400.0);
        assert_eq!(summary.average, Some(400.0));
    }

    #[test]
    fn test_progress_sorts_by_date() {
        let entries = vec![entry("A", 9, 400.0), entry("B", 1, 1.0), entry("A", 2, 100.0)];
        match progress(&entries, "A", 900.0) {
            Progress::Series { entries, goal } => {
                assert_eq!(goal, 900.0);
                let totals: Vec<f64> = entries.iter().map(|e| e.total_co2).collect();
                assert_eq!(totals, vec![100.0, 400.0]);
            }
            other => panic!("expected series, got {:?}", other),
        }
    }
}
