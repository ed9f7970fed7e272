//! Domain models for the footprint tracker.
//!
//! # Core Concepts
//!
//! - [`EmissionFactors`]: kg CO2 per unit for every usage category. Loaded once
//!   and passed to the calculator by reference, never mutated afterwards.
//! - [`InputRecord`]: one person's (or one class's) monthly usage figures.
//! - [`FootprintBreakdown`]: the derived per-category emissions. Recomputed on
//!   every calculation; only its total is persisted.
//! - [`LogEntry`]: append-only record of a past calculation. Multiple entries
//!   per name per day are allowed.
//! - [`ClassSummary`] and [`Progress`]: views over the log.

mod breakdown;
mod factors;
mod input;
mod log;

pub use breakdown::*;
pub use factors::*;
pub use input::*;
pub use log::*;
