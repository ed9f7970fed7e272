use chrono::NaiveDate;
use footprint_tracker::history::{class_summary, progress};
use footprint_tracker::models::*;
use speculate2::speculate;

fn entry(name: &str, date: &str, total: f64) -> LogEntry {
    LogEntry {
        name: name.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("bad date"),
        total_co2: total,
        goal: 900.0,
    }
}

speculate! {
    before {
        let entries = vec![
            entry("A", "2026-01-10", 100.0),
            entry("A", "2026-02-10", 200.0),
            entry("B", "2026-01-10", 50.0),
        ];
    }

    describe "class_summary" {
        it "keeps the latest entry per identity sorted by total" {
            let summary = class_summary(&entries);
            let rows: Vec<(&str, f64)> = summary
                .latest
                .iter()
                .map(|e| (e.name.as_str(), e.total_co2))
                .collect();
            assert_eq!(rows, vec![("B", 50.0), ("A", 200.0)]);
        }

        it "averages the latest totals" {
            assert_eq!(class_summary(&entries).average, Some(125.0));
        }

        it "rounds the average to one decimal" {
            let entries = vec![
                entry("A", "2026-01-10", 100.0),
                entry("B", "2026-01-10", 100.0),
                entry("C", "2026-01-10", 101.0),
            ];
            assert_eq!(class_summary(&entries).average, Some(100.3));
        }

        it "returns an empty summary for an empty log" {
            let summary = class_summary(&[]);
            assert!(summary.is_empty());
            assert_eq!(summary.average, None);
        }

        it "keeps the goal recorded with the latest entry" {
            let mut later = entry("A", "2026-03-01", 300.0);
            later.goal = 700.0;
            let mut entries = entries.clone();
            entries.push(later);
            let summary = class_summary(&entries);
            let a = summary.latest.iter().find(|e| e.name == "A").expect("A missing");
            assert_eq!(a.goal, 700.0);
        }
    }

    describe "progress" {
        it "returns a series when there are two or more entries" {
            match progress(&entries, "A", 900.0) {
                Progress::Series { entries, goal } => {
                    assert_eq!(entries.len(), 2);
                    assert_eq!(goal, 900.0);
                    assert!(entries.iter().all(|e| e.name == "A"));
                }
                other => panic!("expected a series, got {:?}", other),
            }
        }

        it "reports insufficient data for a single entry" {
            assert_eq!(progress(&entries, "B", 900.0), Progress::Insufficient { count: 1 });
        }

        it "reports insufficient data for an unknown identity" {
            assert_eq!(progress(&entries, "Nobody", 900.0), Progress::Insufficient { count: 0 });
        }

        it "matches names exactly" {
            assert_eq!(progress(&entries, "a", 900.0), Progress::Insufficient { count: 0 });
        }

        it "keeps duplicate entries on the same day" {
            let entries = vec![
                entry("A", "2026-01-10", 100.0),
                entry("A", "2026-01-10", 120.0),
            ];
            match progress(&entries, "A", 900.0) {
                Progress::Series { entries, .. } => {
                    let totals: Vec<f64> = entries.iter().map(|e| e.total_co2).collect();
                    assert_eq!(totals, vec![100.0, 120.0]);
                }
                other => panic!("expected a series, got {:?}", other),
            }
        }
    }
}
