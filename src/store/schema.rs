//! Column names for the CSV files. Shared by the log and the exports.

// ── History log / class export ──────────────────────────────────────────────
pub mod log {
    pub const NAME: &str = "Name";
    pub const DATE: &str = "Date";
    pub const TOTAL_CO2: &str = "Total_CO2";
    pub const GOAL: &str = "Goal";
}

// ── Breakdown export ────────────────────────────────────────────────────────
pub mod breakdown {
    pub const CATEGORY: &str = "Category";
    pub const CO2_KG: &str = "CO2_kg";
    pub const PERCENT: &str = "Percent";
    pub const NAME: &str = "Name";
    pub const GOAL: &str = "Goal";
}

/// Date format used in every file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
