//! Plain-text charts and tables for the terminal.

use crate::models::{ClassSummary, FootprintBreakdown, LogEntry, Progress};
use crate::report::{GlobalComparison, GoalStatus, Report, OFFSET_PROGRAMS};

const BAR: char = '█';
const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 15;
const OVER_GOAL: char = '▲';

/// Number of bar cells for `value` on a scale where `max` fills the width.
fn bar_len(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * BAR_WIDTH as f64).round() as usize
}

fn bar(value: f64, max: f64) -> String {
    std::iter::repeat(BAR).take(bar_len(value, max)).collect()
}

/// Horizontal bar chart of the categories, largest first.
///
/// Example output:
/// ```text
/// Electricity     ████████████████████████████████████████ 368.0 kg
/// Car Travel      ██████████████████████████ 242.4 kg
/// ```
pub fn render_bar_chart(breakdown: &FootprintBreakdown) -> String {
    let sorted = breakdown.sorted_by_emissions();
    let max = sorted.first().map(|c| c.co2_kg).unwrap_or(0.0);

    let mut output = String::new();
    for c in &sorted {
        output.push_str(&format!(
            "{:<width$} {} {:.1} kg\n",
            c.category.label(),
            bar(c.co2_kg, max),
            c.co2_kg,
            width = LABEL_WIDTH
        ));
    }
    output
}

/// Share of each category in the total, largest first, with a total line.
pub fn render_contribution(breakdown: &FootprintBreakdown) -> String {
    let mut output = String::new();
    for c in breakdown.sorted_by_emissions() {
        output.push_str(&format!(
            "{:<width$} {:>8.1} kg  ({:.1}%)\n",
            c.category.label(),
            c.co2_kg,
            c.percent,
            width = LABEL_WIDTH
        ));
    }
    output.push_str(&format!(
        "{:<width$} {:>8} kg\n",
        "Total",
        breakdown.total,
        width = LABEL_WIDTH
    ));
    output
}

/// Totals over time for one identity. Entries above the goal are flagged.
pub fn render_progress(name: &str, progress: &Progress) -> String {
    match progress {
        Progress::Insufficient { .. } => {
            "Not enough data points to show progress chart.\n".to_string()
        }
        Progress::Series { entries, goal } => {
            let max = entries
                .iter()
                .map(|e| e.total_co2)
                .fold(*goal, f64::max);

            let mut output = format!("CO2 emissions over time for {}\n", name);
            for entry in entries {
                output.push_str(&format!(
                    "{} {} {:.1} kg",
                    entry.date,
                    bar(entry.total_co2, max),
                    entry.total_co2
                ));
                if entry.total_co2 > *goal {
                    output.push(' ');
                    output.push(OVER_GOAL);
                }
                output.push('\n');
            }
            output.push_str(&format!("Goal: {} kg ({} = over goal)\n", goal, OVER_GOAL));
            output
        }
    }
}

fn render_entry_row(output: &mut String, entry: &LogEntry, name_width: usize) {
    output.push_str(&format!(
        "{:<nw$}  {}  {:>9}  {:>6}\n",
        entry.name,
        entry.date,
        entry.total_co2,
        entry.goal,
        nw = name_width
    ));
}

/// Latest record per student or class, plus the class average.
pub fn render_class(summary: &ClassSummary) -> String {
    let Some(average) = summary.average else {
        return "No class data available yet.\n".to_string();
    };

    let name_width = summary
        .latest
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut output = format!(
        "{:<nw$}  {:<10}  {:>9}  {:>6}\n",
        "Name",
        "Date",
        "Total_CO2",
        "Goal",
        nw = name_width
    );
    for entry in &summary.latest {
        render_entry_row(&mut output, entry, name_width);
    }
    output.push_str(&format!(
        "Class average CO2 emissions: {} kg/month\n",
        average
    ));
    output
}

/// The full results view for a calculation.
pub fn render_report(report: &Report) -> String {
    let breakdown = &report.breakdown;
    let mut output = String::from("Your Monthly Carbon Footprint\n");

    output.push_str(&format!(
        "Total monthly footprint: {} kg CO2e ({}% of global average)\n",
        breakdown.total, breakdown.percent_global
    ));
    let goal_line = match report.goal_status {
        GoalStatus::Under { margin } => format!(
            "Great job, {}! You're under your monthly goal by {} kg CO2e.\n",
            report.name, margin
        ),
        GoalStatus::Over { excess } => format!(
            "You're over your monthly goal by {} kg CO2e. Review your top emission areas below!\n",
            excess
        ),
    };
    output.push_str(&goal_line);

    output.push_str("\nEmission breakdown\n");
    output.push_str(&render_bar_chart(breakdown));
    output.push_str("\nPercentage contribution\n");
    output.push_str(&render_contribution(breakdown));

    output.push_str("\nTips to reduce your emissions:\n");
    for tip in &report.tips {
        output.push_str(&format!("- {}: {}\n", tip.category.label(), tip.advice));
    }
    output.push_str("\nWant to offset your carbon? Consider these programs:\n");
    for (name, url) in OFFSET_PROGRAMS {
        output.push_str(&format!("- {} ({})\n", name, url));
    }

    output.push_str("\nHow do you compare?\n");
    let comparison = match report.comparison {
        GlobalComparison::Better => format!(
            "You're doing better than average! Your footprint is {}% of the global average.\n",
            breakdown.percent_global
        ),
        GlobalComparison::OnPar => "You're right on track with the global average.\n".to_string(),
        GlobalComparison::Worse => format!(
            "Your footprint is {}% of the global average. Consider making changes.\n",
            breakdown.percent_global
        ),
    };
    output.push_str(&comparison);

    output.push_str("\nYour carbon footprint history\n");
    match &report.progress {
        Some(progress) => output.push_str(&render_progress(&report.name, progress)),
        None => output.push_str("No history data available yet.\n"),
    }

    output.push_str("\nLatest records by student/class\n");
    match &report.class {
        Some(class) => output.push_str(&render_class(class)),
        None => output.push_str("No class data available yet.\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryEmission};
    use chrono::NaiveDate;

    fn make_breakdown(amounts: [f64; 5]) -> FootprintBreakdown {
        let total: f64 = amounts.iter().sum();
        FootprintBreakdown {
            categories: Category::ALL
                .iter()
                .zip(amounts)
                .map(|(category, co2_kg)| CategoryEmission {
                    category: *category,
                    co2_kg,
                    percent: if total > 0.0 { 100.0 * co2_kg / total } else { 0.0 },
                })
                .collect(),
            total,
            percent_global: total / 10.0,
        }
    }

    fn make_entry(name: &str, day: u32, total: f64) -> LogEntry {
        LogEntry {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 5, day).unwrap(),
            total_co2: total,
            goal: 900.0,
        }
    }

    #[test]
    fn test_bar_len_scales_to_width() {
        assert_eq!(bar_len(10.0, 10.0), BAR_WIDTH);
        assert_eq!(bar_len(5.0, 10.0), BAR_WIDTH / 2);
        assert_eq!(bar_len(0.0, 10.0), 0);
        assert_eq!(bar_len(3.0, 0.0), 0);
    }

    #[test]
    fn test_bar_chart_orders_largest_first() {
        let output = render_bar_chart(&make_breakdown([10.0, 40.0, 20.0, 0.0, 0.0]));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Natural Gas"));
        assert!(lines[0].ends_with("40.0 kg"));
        assert_eq!(lines[0].matches(BAR).count(), BAR_WIDTH);
        assert!(lines[1].starts_with("Car Travel"));
        assert_eq!(lines[1].matches(BAR).count(), BAR_WIDTH / 2);
        assert_eq!(lines[4].matches(BAR).count(), 0);
    }

    #[test]
    fn test_bar_chart_all_zero() {
        let output = render_bar_chart(&make_breakdown([0.0; 5]));
        assert_eq!(output.matches(BAR).count(), 0);
        assert_eq!(output.lines().next(), Some("Electricity      0.0 kg"));
    }

    #[test]
    fn test_progress_insufficient() {
        let output = render_progress("Maya", &Progress::Insufficient { count: 1 });
        assert_eq!(output, "Not enough data points to show progress chart.\n");
    }

    #[test]
    fn test_progress_marks_entries_over_goal() {
        let progress = Progress::Series {
            entries: vec![make_entry("Maya", 1, 950.0), make_entry("Maya", 2, 850.0)],
            goal: 900.0,
        };
        let output = render_progress("Maya", &progress);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "CO2 emissions over time for Maya");
        assert!(lines[1].starts_with("2026-05-01"));
        assert!(lines[1].ends_with("950.0 kg ▲"));
        assert!(lines[2].ends_with("850.0 kg"));
        assert_eq!(lines[3], "Goal: 900 kg (▲ = over goal)");
    }

    #[test]
    fn test_class_table() {
        let summary = ClassSummary {
            latest: vec![make_entry("B", 1, 50.0), make_entry("Anna", 2, 200.0)],
            average: Some(125.0),
        };
        let output = render_class(&summary);
        let expected = "\
Name  Date        Total_CO2    Goal
B     2026-05-01         50     900
Anna  2026-05-02        200     900
Class average CO2 emissions: 125 kg/month
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_class() {
        assert_eq!(
            render_class(&ClassSummary::default()),
            "No class data available yet.\n"
        );
    }

    #[test]
    fn test_report_sections_without_history() {
        use crate::calculator::calculate;
        use crate::models::{EmissionFactors, InputRecord};

        let input = InputRecord {
            name: "Maya".to_string(),
            ..InputRecord::default()
        };
        let breakdown = calculate(&input, &EmissionFactors::default()).unwrap();
        let output = render_report(&Report::build(&input, breakdown, None));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Your Monthly Carbon Footprint");
        assert_eq!(
            lines[1],
            "Total monthly footprint: 807.16 kg CO2e (80.7% of global average)"
        );
        assert_eq!(
            lines[2],
            "Great job, Maya! You're under your monthly goal by 92.8 kg CO2e."
        );
        assert!(lines.contains(&"- Electricity: Switch to renewables, unplug devices, use LED bulbs"));
        assert!(lines.contains(&"- Gold Standard (https://www.goldstandard.org/)"));
        assert!(output.ends_with("No history data available yet.\n\nLatest records by student/class\nNo class data available yet.\n"));
    }
}
