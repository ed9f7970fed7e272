//! Everything shown after a calculation, as plain data.

use serde::{Deserialize, Serialize};

use crate::calculator::round_to;
use crate::models::*;

/// Where the total stands against the personal goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalStatus {
    /// At or below the goal by `margin` kg.
    Under { margin: f64 },
    /// Above the goal by `excess` kg.
    Over { excess: f64 },
}

impl GoalStatus {
    pub fn evaluate(total: f64, goal: f64) -> Self {
        if total <= goal {
            Self::Under {
                margin: round_to(goal - total, 1),
            }
        } else {
            Self::Over {
                excess: round_to(total - goal, 1),
            }
        }
    }
}

/// Comparison against the global monthly average.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GlobalComparison {
    Better,
    OnPar,
    Worse,
}

impl GlobalComparison {
    pub fn from_percent(percent_global: f64) -> Self {
        if percent_global < 100.0 {
            Self::Better
        } else if percent_global == 100.0 {
            Self::OnPar
        } else {
            Self::Worse
        }
    }
}

/// A reduction tip for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tip {
    pub category: Category,
    pub advice: String,
}

pub fn tip_for(category: Category) -> &'static str {
    match category {
        Category::Electricity => "Switch to renewables, unplug devices, use LED bulbs",
        Category::NaturalGas => "Improve insulation, reduce heating temperature",
        Category::CarTravel => "Use public transport, carpool, or go electric",
        Category::Flights => "Travel less by air or offset your trips",
        Category::DigitalDevices => "Power off when not in use, reduce screen time",
    }
}

/// Carbon offset programmes suggested alongside the tips, as (name, url).
pub const OFFSET_PROGRAMS: [(&str, &str); 3] = [
    ("Gold Standard", "https://www.goldstandard.org/"),
    ("Cool Effect", "https://www.cooleffect.org/"),
    ("CarbonFund.org", "https://carbonfund.org/"),
];

/// Result of a completed calculation.
///
/// `progress` and `class` describe the log as it stood before this
/// calculation was appended to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub name: String,
    pub goal: f64,
    pub breakdown: FootprintBreakdown,
    pub goal_status: GoalStatus,
    pub comparison: GlobalComparison,
    /// One tip per category, highest emitter first.
    pub tips: Vec<Tip>,
    /// `None` when no log file exists yet.
    pub progress: Option<Progress>,
    pub class: Option<ClassSummary>,
}

impl Report {
    pub fn build(
        input: &InputRecord,
        breakdown: FootprintBreakdown,
        history: Option<&[LogEntry]>,
    ) -> Self {
        let tips = breakdown
            .sorted_by_emissions()
            .into_iter()
            .map(|c| Tip {
                category: c.category,
                advice: tip_for(c.category).to_string(),
            })
            .collect();

        Self {
            name: input.name.clone(),
            goal: input.goal,
            goal_status: GoalStatus::evaluate(breakdown.total, input.goal),
            comparison: GlobalComparison::from_percent(breakdown.percent_global),
            tips,
            progress: history.map(|h| crate::history::progress(h, &input.name, input.goal)),
            class: history.map(crate::history::class_summary),
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_status_boundary_counts_as_under() {
        assert_eq!(
            GoalStatus::evaluate(900.0, 900.0),
            GoalStatus::Under { margin: 0.0 }
        );
        assert_eq!(
            GoalStatus::evaluate(934.58, 900.0),
            GoalStatus::Over { excess: 34.6 }
        );
    }

    #[test]
    fn test_global_comparison() {
        assert_eq!(GlobalComparison::from_percent(99.9), GlobalComparison::Better);
        assert_eq!(GlobalComparison::from_percent(100.0), GlobalComparison::OnPar);
        assert_eq!(GlobalComparison::from_percent(100.1), GlobalComparison::Worse);
    }
}
